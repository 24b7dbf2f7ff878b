use thiserror::Error;

use stockview_core::DomainError;

/// Fatal startup failures while reading the inventory data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported data file format: {0:?} (expected .xlsx, .xls or .csv)")]
    UnsupportedFormat(String),

    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("excel parse failed: {0}")]
    ExcelParse(String),

    #[error("csv parse failed: {0}")]
    CsvParse(String),

    #[error("worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("data file has no header row")]
    MissingHeader,

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("row {row}: sku is empty")]
    MissingSku { row: usize },

    #[error("row {row}, column {column}: invalid quantity {value:?}")]
    InvalidQuantity {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
