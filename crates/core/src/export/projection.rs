use super::error::{ExportError, Result};
use crate::source::Row;

/// Columns exported when no other header is given.
pub const DEFAULT_COLUMNS: [&str; 3] = ["id", "column2", "column3"];

/// Ordered, non-empty list of column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(ExportError::EmptyHeader);
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A header followed by data rows, each holding exactly one field per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    header: Header,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Data rows, without the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Header first, then every data row in source order.
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.columns()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// Projects every row onto `header`.
///
/// All or nothing: the first row lacking a header column fails the whole
/// projection. Attributes outside the header are ignored.
pub fn project_rows(header: &Header, rows: &[Row]) -> Result<CsvTable> {
    let projected = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| project_row(header, row, row_index))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        columns = header.len(),
        rows = projected.len(),
        "Projected rows onto header"
    );

    Ok(CsvTable {
        header: header.clone(),
        rows: projected,
    })
}

fn project_row(header: &Header, row: &Row, row_index: usize) -> Result<Vec<String>> {
    header
        .columns()
        .iter()
        .map(|column| {
            row.get(column)
                .cloned()
                .ok_or_else(|| ExportError::MissingColumn {
                    column: column.clone(),
                    row_index,
                })
        })
        .collect()
}
