use super::error::ImportError;
use crate::datamodel::{CellValue, Dataset};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

/// Read one sheet of an xlsx/xlsm/xls/ods workbook.
///
/// Without a sheet name the first sheet is read. The first `skip_rows` rows
/// of the sheet are ignored and the next row is the header.
pub fn read_spreadsheet(
    path: &Path,
    sheet: Option<&str>,
    skip_rows: usize,
) -> Result<Dataset, ImportError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|sheet_name| sheet_name == name) {
                return Err(ImportError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::SheetNotFound(format!("{}#0", path.display())))??,
    };

    debug!(
        "Read {} rows x {} columns from {}",
        range.height(),
        range.width(),
        path.display()
    );

    range_to_dataset(&range, skip_rows).map_err(|err| match err {
        ImportError::MissingHeader(_) => ImportError::MissingHeader(path.to_path_buf()),
        other => other,
    })
}

/// Convert a cell range to a dataset, the header being the first kept row.
///
/// `skip_rows` counts from the first row of the sheet, not from the first
/// used row of the range. Leading blank rows that calamine trimmed count as
/// skipped.
pub fn range_to_dataset(range: &Range<Data>, skip_rows: usize) -> Result<Dataset, ImportError> {
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range.rows().skip(skip_rows.saturating_sub(first_row));

    let header = rows
        .next()
        .ok_or_else(|| ImportError::MissingHeader(Default::default()))?
        .iter()
        .map(|cell| convert_cell(cell).to_string())
        .collect::<Vec<_>>();

    let rows = rows
        .map(|row| row.iter().map(convert_cell).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    Ok(Dataset::from_rows(header, rows)?)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Boolean(*value),
        Data::String(value) => CellValue::String(value.clone()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Float(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::String(value.clone()),
        // #N/A, #DIV/0! and friends are missing values
        Data::Error(_) => CellValue::Empty,
    }
}
