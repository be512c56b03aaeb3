//! Error types and format dispatch for dataset loading

use crate::table::RawTable;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Unknown column key: {0}")]
    UnknownColumn(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Open a dataset file and load it into a raw table
///
/// The delimiter is picked from the file extension.
pub fn open_file(path: &str) -> IoResult<RawTable> {
    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => crate::csv_reader::CsvReader::open(path).map(|r| r.into_table()),

        #[cfg(feature = "csv")]
        "tsv" => crate::csv_reader::CsvReader::open_with_options(path, b'\t')
            .map(|r| r.into_table()),

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
    }

    extensions
}
