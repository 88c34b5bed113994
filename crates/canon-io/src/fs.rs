//! Whole-file reads and atomic in-place overwrites.

use std::fs;
use std::io::Write;
use std::path::Path;

use canon_core::{CanonError, Result};
use tempfile::NamedTempFile;

/// Read a file that must be UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| CanonError::InvalidUtf8 { path: path.to_path_buf() })
}

/// Replace `path` with `data` via a temp file in the same directory and a
/// rename. Readers see either the old content or the new, never a mix.
/// Permissions of an existing target are carried over.
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = data.len(), "file replaced");
    Ok(())
}
