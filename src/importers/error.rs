use crate::datamodel::DatasetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dataset at startup.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Every row was skipped, or the sheet is empty
    #[error("No header row found in {0}")]
    MissingHeader(PathBuf),

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }
}
