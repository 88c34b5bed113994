//! Text scrubbing — fancy Unicode to plain ASCII, emoji removed.

use crate::transliterate::{strip_emoji, to_ascii};

/// Scrub a whole document in one pass.
pub fn scrub(text: &str) -> String {
    strip_emoji(&to_ascii(text))
}
