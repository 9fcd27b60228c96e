//! Projection of row mappings onto a fixed header and CSV emission.

mod error;
mod projection;
mod writer;

pub use error::{ExportError, Result};
pub use projection::{project_rows, CsvTable, Header, DEFAULT_COLUMNS};
pub use writer::write_table;
