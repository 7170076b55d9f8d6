//! Whitespace as browser clients see it.
//!
//! JavaScript's `\s` and `String.prototype.trim` use Unicode `White_Space`
//! plus U+FEFF and minus U+0085. Word counts, similarity and diff tokens all
//! go through this set so results match documents produced in a browser.

/// Whitespace character, JavaScript rules.
pub fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// True when `text` is empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_whitespace)
}

/// Non-empty pieces of `text` between whitespace runs.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_whitespace).filter(|piece| !piece.is_empty())
}
