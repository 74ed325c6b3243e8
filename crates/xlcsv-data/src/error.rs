//! Error types for the conversion core.

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while converting, filtering, or sorting files
#[derive(Debug, Error)]
pub enum DataError {
    /// Target path does not exist
    #[error("File does not exist: {0}")]
    FileNotFound(String),

    /// Operation requires a `.csv` path
    #[error("File is not a csv file: {0}")]
    NotCsv(String),

    /// Operation requires an `.xlsx` path
    #[error("File is not an excel file: {0}")]
    NotExcel(String),

    /// `filter` invoked without a headers argument
    #[error("Headers are required")]
    MissingHeaders,

    /// One or more requested column names are absent from the header row
    #[error("Invalid headers: {0}")]
    InvalidHeaders(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading or writing the workbook archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Calamine error
    #[error("Excel error: {0}")]
    Excel(String),

    /// CSV rendering error
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<calamine::Error> for DataError {
    fn from(err: calamine::Error) -> Self {
        DataError::Excel(err.to_string())
    }
}

impl From<calamine::XlsxError> for DataError {
    fn from(err: calamine::XlsxError) -> Self {
        DataError::Excel(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
