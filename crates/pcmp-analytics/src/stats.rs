//! Character, word and line counts for a single prompt.

use serde::{Deserialize, Serialize};

use crate::whitespace;

/// Basic counts derived from a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    /// Absolute per-field difference between two sets of stats.
    pub fn delta(&self, other: &TextStats) -> TextStats {
        TextStats {
            chars: self.chars.abs_diff(other.chars),
            words: self.words.abs_diff(other.words),
            lines: self.lines.abs_diff(other.lines),
        }
    }
}

/// Compute stats for a text.
///
/// `chars` counts UTF-16 code units so exported documents stay comparable
/// with ones produced by browser clients. `lines` counts `\n`-separated
/// segments: the empty string has one line and a trailing newline adds an
/// empty last line.
pub fn compute_stats(text: &str) -> TextStats {
    TextStats {
        chars: text.encode_utf16().count(),
        words: count_words(text),
        lines: text.split('\n').count(),
    }
}

/// Number of whitespace-separated words in the trimmed text.
pub fn count_words(text: &str) -> usize {
    whitespace::words(text).count()
}
