//! ASCII transliteration and emoji removal.

use regex::Regex;
use std::sync::LazyLock;

static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    "[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\
     \u{1F700}-\u{1F77F}\u{1F780}-\u{1F7FF}\u{1F800}-\u{1F8FF}\
     \u{1F900}-\u{1F9FF}\u{1FA00}-\u{1FA6F}\u{1FA70}-\u{1FAFF}\
     \u{2600}-\u{26FF}\u{2700}-\u{27BF}\u{FE00}-\u{FE0F}\
     \u{1F1E6}-\u{1F1FF}]+"
).unwrap());

/// Remove every character in the emoji, pictograph and symbol blocks.
pub fn strip_emoji(text: &str) -> String {
    RE_EMOJI.replace_all(text, "").into_owned()
}

/// Any char the emoji table knows, wherever it sits in Unicode (`⌚`, `⭐`, `🆗`).
fn is_pictograph(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Map text to its closest ASCII rendering.
///
/// Accented and stylized letters become plain letters. Emoji and symbols
/// without an ASCII counterpart are dropped rather than spelled out.
pub fn to_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for c in strip_emoji(text).chars() {
        if c.is_ascii() {
            out.push(c);
        } else if !is_pictograph(c) {
            if let Some(ascii) = deunicode::deunicode_char(c) {
                out.push_str(ascii);
            }
        }
    }
    out
}
