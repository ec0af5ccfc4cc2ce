use super::error::ImportError;
use crate::datamodel::{CellValue, Dataset};
use csv_async::AsyncReader;
use futures::{StreamExt, io};
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Read a comma separated file. Cell types are inferred per cell.
pub async fn read_csv_file(path: &Path, skip_rows: usize) -> Result<Dataset, ImportError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|err| ImportError::io(path, err))?;

    // csv_async already uses a BufReader internally
    let csv_reader = csv_async::AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(file.compat());

    read_csv(csv_reader, skip_rows)
        .await
        .map_err(|err| match err {
            ImportError::MissingHeader(_) => ImportError::MissingHeader(path.to_path_buf()),
            other => other,
        })
}

/// Read every record, dropping `skip_rows` leading ones and using the next as header.
pub async fn read_csv<R: io::AsyncRead + Unpin + Send>(
    mut csv_reader: AsyncReader<R>,
    skip_rows: usize,
) -> Result<Dataset, ImportError> {
    let mut records = csv_reader.records().skip(skip_rows);

    let header = match records.next().await {
        Some(record) => record?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
        None => return Err(ImportError::MissingHeader(Default::default())),
    };

    let mut rows = Vec::new();
    while let Some(record) = records.next().await {
        let record = record?;
        let row = record.iter().map(CellValue::infer).collect::<Vec<_>>();
        rows.push(row);
    }

    Ok(Dataset::from_rows(header, rows)?)
}
