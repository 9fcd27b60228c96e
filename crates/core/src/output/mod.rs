//! Append-only CSV output files.

mod error;
mod file;

pub use error::{OutputError, Result};
pub use file::{csv_file_path, open_csv_for_append};
