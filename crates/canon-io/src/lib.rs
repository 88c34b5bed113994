//! File plumbing: CSV contact tables and plain text, overwritten atomically.

pub mod fs;
pub mod table;

use std::path::Path;

use canon_core::{ContactTable, Result};

pub use fs::{read_text, write_atomic};
pub use table::{load_table, read_table, table_to_bytes, write_table};

/// Overwrite `path` with the serialized table.
pub fn save_table(path: impl AsRef<Path>, table: &ContactTable) -> Result<()> {
    let bytes = table_to_bytes(table)?;
    write_atomic(path, &bytes)
}

/// Overwrite `path` with UTF-8 text.
pub fn save_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    write_atomic(path, text.as_bytes())
}
