use crate::domain::model::{Record, REPORT_HEADER};
use crate::utils::error::Result;
use csv::WriterBuilder;
use std::io::Write;

/// Writes the fixed header followed by one row per record. The header is
/// emitted even when `records` is empty.
pub fn write_report<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn render_report(records: &[Record]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, records)?;
    Ok(buffer)
}
