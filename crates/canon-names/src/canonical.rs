//! Canonicalization — selected name → ASCII identifier.
//!
//! Steps, each on the output of the previous one:
//! 1. transliterate to ASCII
//! 2. anything but `[A-Za-z0-9 ]` → `_`
//! 3. whitespace runs → `_`
//! 4. runs of 3+ identical chars → one char
//! 5. strip leading `_`
//! 6. pad a single char with a trailing `_`

use canon_core::Record;
use regex::Regex;
use std::sync::LazyLock;

use crate::transliterate;

static RE_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Shortest run of one repeated char that gets collapsed.
pub const REPEAT_RUN_MIN: usize = 3;

/// Collapse every maximal run of `min_run` or more identical chars into one.
pub fn collapse_repeats(text: &str, min_run: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let keep = if run >= min_run { 1 } else { run };
        out.extend(std::iter::repeat(c).take(keep));
    }
    out
}

/// Canonicalize one name.
pub fn canonicalize(name: &str) -> String {
    let ascii = transliterate::to_ascii(name);
    let replaced = RE_DISALLOWED.replace_all(&ascii, "_");
    let joined = RE_WHITESPACE.replace_all(&replaced, "_");
    let collapsed = collapse_repeats(&joined, REPEAT_RUN_MIN);
    let mut result = collapsed.trim_start_matches('_').to_string();
    if result.len() == 1 {
        result.push('_');
    }
    result
}

/// Space-joined non-empty values of `fields`.
pub fn fallback_text<S: AsRef<str>>(record: &Record, fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| record.get(f.as_ref()).trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `name` already satisfies every canonical-form rule.
pub fn is_canonical(name: &str) -> bool {
    !name.is_empty()
        && name.len() != 1
        && !name.starts_with('_')
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
        && collapse_repeats(name, REPEAT_RUN_MIN) == name
}
