//! CSV load/store for contact tables.

use std::io::{Read, Write};
use std::path::Path;

use canon_core::{CanonError, ContactTable, Result};

/// Parse CSV with a header row. Short rows are padded with `""`; rows
/// longer than the header are rejected.
pub fn read_table<R: Read>(reader: R) -> Result<ContactTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(CanonError::MissingHeader);
    }

    let mut table = ContactTable::new(headers.iter());
    for result in rdr.records() {
        let row = result?;
        if row.len() > headers.len() {
            return Err(CanonError::MalformedRow {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                expected: headers.len(),
                found: row.len(),
            });
        }
        table.push_row(row.iter());
    }
    Ok(table)
}

/// Serialize the header and every row, in order.
pub fn write_table<W: Write>(writer: W, table: &ContactTable) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(table.columns())?;
    for record in table.records() {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn table_to_bytes(table: &ContactTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_table(&mut buf, table)?;
    Ok(buf)
}

pub fn load_table(path: impl AsRef<Path>) -> Result<ContactTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = read_table(std::io::BufReader::new(file))?;
    tracing::debug!(path = %path.display(), rows = table.len(), columns = table.columns().len(), "loaded table");
    Ok(table)
}
