use thiserror::Error;

/// Errors that can occur while shaping or writing a CSV table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Column '{column}' not found in row {row_index}")]
    MissingColumn { column: String, row_index: usize },

    #[error("Header must contain at least one column")]
    EmptyHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
