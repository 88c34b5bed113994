//! Blank subsidiary name columns.

use canon_core::ContactTable;

/// Set every listed column to `""` in every row. Columns the table lacks are
/// skipped. Returns the number of columns cleared.
pub fn clear_fields<S: AsRef<str>>(table: &mut ContactTable, fields: &[S]) -> usize {
    let present: Vec<&str> = fields
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| table.has_column(f))
        .collect();
    for record in table.records_mut() {
        for field in &present {
            record.set(field, String::new());
        }
    }
    present.len()
}
