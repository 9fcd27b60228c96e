use std::io::Write;

use super::error::Result;
use super::projection::CsvTable;

/// Serializes `table` as comma-separated values and flushes `writer`.
///
/// The header is always written, even for tables without data rows. Returns
/// the number of data rows written.
pub fn write_table<W: Write>(table: &CsvTable, writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in table.records() {
        csv_writer.write_record(record)?;
    }
    csv_writer.flush()?;

    Ok(table.rows().len())
}
