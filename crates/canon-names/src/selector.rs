//! Name selection — pick the most meaningful candidate field of a record.

use canon_core::Record;
use regex::Regex;
use std::sync::LazyLock;

/// Digits and underscores only: `123`, `___`, `42__`, `_7_`.
static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:_+|_*\d+_*)$").unwrap());
/// Metadata written by contact import tools.
static RE_IMPORT_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^imported on").unwrap());

/// Whether a field value reads like a real name.
pub fn is_meaningful(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if RE_PLACEHOLDER.is_match(value) || RE_IMPORT_TAG.is_match(value) {
        return false;
    }
    value.chars().any(|c| c.is_ascii_alphabetic())
}

/// First meaningful candidate in priority order, else the first non-empty
/// one, else `""`. Values are returned trimmed.
pub fn select<'r, S: AsRef<str>>(record: &'r Record, fields: &[S]) -> &'r str {
    let mut first_non_empty = None;
    for field in fields {
        let value = record.get(field.as_ref()).trim();
        if value.is_empty() {
            continue;
        }
        if is_meaningful(value) {
            return value;
        }
        first_non_empty.get_or_insert(value);
    }
    first_non_empty.unwrap_or("")
}
