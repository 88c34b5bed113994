use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed row at line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow { line: u64, expected: usize, found: usize },
    #[error("Missing header row")]
    MissingHeader,
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CanonError>;
