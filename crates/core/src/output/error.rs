use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output file name must not be empty")]
    EmptyFileName,

    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open '{}' for appending: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
