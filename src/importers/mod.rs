use crate::datamodel::{Dataset, DatasetKey};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod csv;
pub mod error;
pub mod spreadsheet;

pub use error::ImportError;

/// Where and how to read one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub key: DatasetKey,
    pub path: PathBuf,
    /// Sheet to read, the first one when unset. Ignored for CSV.
    pub sheet: Option<String>,
    /// Rows above the header.
    pub skip_rows: usize,
}

impl DataSource {
    pub fn new(key: DatasetKey, path: impl Into<PathBuf>) -> Self {
        Self {
            key,
            path: path.into(),
            sheet: None,
            skip_rows: 0,
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load a dataset, picking the reader from the file extension.
pub async fn load_dataset(source: &DataSource) -> Result<Dataset, ImportError> {
    let dataset = if is_csv(&source.path) {
        csv::read_csv_file(&source.path, source.skip_rows).await?
    } else {
        spreadsheet::read_spreadsheet(&source.path, source.sheet.as_deref(), source.skip_rows)?
    };

    info!(
        "Loaded dataset {} from {}: {} rows, columns {:?}",
        source.key,
        source.path.display(),
        dataset.row_count(),
        dataset.column_names().collect::<Vec<_>>()
    );

    Ok(dataset)
}
