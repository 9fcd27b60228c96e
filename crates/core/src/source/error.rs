use thiserror::Error;

/// Errors that can occur while fetching rows from an item source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Invalid query request: {0}")]
    InvalidRequest(String),
    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for item source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
