//! Positional word diff for side-by-side display.
//!
//! Both texts are cut into tokens (newlines, whitespace runs and word runs)
//! and compared index by index. There is no sequence alignment: an inserted
//! word in one text shifts every later token, and everything after it shows
//! up as changed. Highlighting depends on that positional behaviour, so an
//! edit-distance diff belongs in a separate function, not in this one.

use serde::{Deserialize, Serialize};

use crate::whitespace;

/// One displayable piece of an annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    /// Token that matches the other side, or whitespace.
    Literal { text: String },
    /// Word token that differs from the token at the same position.
    Highlighted { text: String },
    /// A `\n` in the source text.
    LineBreak,
}

/// Annotated view of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffAnnotation(pub Vec<Segment>);

impl DiffAnnotation {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Text of every highlighted segment, in order.
    pub fn highlighted(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Highlighted { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_differences(&self) -> bool {
        self.highlighted().next().is_some()
    }

    /// Reassemble the annotated text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            match segment {
                Segment::Literal { text } | Segment::Highlighted { text } => out.push_str(text),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Split `text` so that concatenating the tokens gives back `text`.
///
/// Each `\n` is its own token; other whitespace and non-whitespace are
/// grouped into maximal runs.
pub fn tokenize(text: &str) -> Vec<&str> {
    #[derive(PartialEq, Clone, Copy)]
    enum Class {
        Newline,
        Space,
        Word,
    }

    fn class_of(c: char) -> Class {
        if c == '\n' {
            Class::Newline
        } else if whitespace::is_whitespace(c) {
            Class::Space
        } else {
            Class::Word
        }
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<Class> = None;

    for (idx, c) in text.char_indices() {
        let class = class_of(c);
        if let Some(prev) = current {
            if prev != class || class == Class::Newline {
                tokens.push(&text[start..idx]);
                start = idx;
            }
        }
        current = Some(class);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Annotate `own_text` against `other_text`.
pub fn highlight(own_text: &str, other_text: &str) -> DiffAnnotation {
    let own_tokens = tokenize(own_text);
    let other_tokens = tokenize(other_text);
    let len = own_tokens.len().max(other_tokens.len());

    let mut segments = Vec::with_capacity(own_tokens.len());
    for i in 0..len {
        let own_tok = own_tokens.get(i).copied().unwrap_or("");
        let other_tok = other_tokens.get(i).copied().unwrap_or("");

        if own_tok == "\n" {
            segments.push(Segment::LineBreak);
        } else if own_tok != other_tok && !whitespace::is_blank(own_tok) {
            segments.push(Segment::Highlighted { text: own_tok.to_string() });
        } else if !own_tok.is_empty() {
            segments.push(Segment::Literal { text: own_tok.to_string() });
        }
    }

    DiffAnnotation(segments)
}

/// Annotate both sides of a comparison.
pub fn highlight_pair(text_a: &str, text_b: &str) -> (DiffAnnotation, DiffAnnotation) {
    (highlight(text_a, text_b), highlight(text_b, text_a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lit(text: &str) -> Segment {
        Segment::Literal { text: text.to_string() }
    }

    fn hi(text: &str) -> Segment {
        Segment::Highlighted { text: text.to_string() }
    }

    #[test]
    fn test_tokenize_keeps_everything() {
        assert_eq!(
            tokenize("a  b\n\nc\t"),
            vec!["a", "  ", "b", "\n", "\n", "c", "\t"]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_browser_whitespace() {
        assert_eq!(tokenize("a\u{FEFF}b"), vec!["a", "\u{FEFF}", "b"]);
        assert_eq!(tokenize("a\u{0085}b"), vec!["a\u{0085}b"]);
    }

    #[test]
    fn test_tokenize_newline_inside_whitespace() {
        assert_eq!(tokenize("a \n b"), vec!["a", " ", "\n", " ", "b"]);
    }

    #[test]
    fn test_identical_texts_have_no_highlights() {
        let text = "Summarize the following\narticle in three bullets.";
        let annotation = highlight(text, text);
        assert!(!annotation.has_differences());
        assert_eq!(annotation.to_text(), text);
    }

    #[test]
    fn test_changed_word_is_highlighted() {
        let annotation = highlight("hello world", "hello earth");
        assert_eq!(annotation.segments(), &[lit("hello"), lit(" "), hi("world")]);
    }

    #[test]
    fn test_newline_becomes_marker() {
        let annotation = highlight("a\nb", "a\nc");
        assert_eq!(annotation.segments(), &[lit("a"), Segment::LineBreak, hi("b")]);
    }

    #[test]
    fn test_longer_side_highlights_tail() {
        let (a, b) = highlight_pair("one two three", "one two");
        assert_eq!(a.highlighted().collect::<Vec<_>>(), vec!["three"]);
        assert!(!b.has_differences());
        assert_eq!(b.to_text(), "one two");
    }

    #[test]
    fn test_insertion_cascades() {
        // Positional comparison: the inserted word shifts everything after it.
        let annotation = highlight("the big red fox", "the red fox");
        assert_eq!(
            annotation.highlighted().collect::<Vec<_>>(),
            vec!["big", "red", "fox"]
        );
    }

    #[test]
    fn test_whitespace_never_highlighted() {
        let annotation = highlight("a   b", "a b");
        assert!(annotation
            .segments()
            .iter()
            .all(|s| !matches!(s, Segment::Highlighted { text } if text.trim().is_empty())));
        assert_eq!(annotation.segments()[1], lit("   "));
    }

    #[test]
    fn test_serialized_shape() {
        let annotation = highlight("a\nb", "a\nx");
        let json = serde_json::to_value(&annotation).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"kind": "literal", "text": "a"},
                {"kind": "lineBreak"},
                {"kind": "highlighted", "text": "b"}
            ])
        );
    }

    proptest! {
        #[test]
        fn prop_tokens_rebuild_text(text in "[ab \t\n]{0,40}") {
            prop_assert_eq!(tokenize(&text).concat(), text);
        }

        #[test]
        fn prop_annotation_rebuilds_own_text(a in "[ab \n]{0,30}", b in "[ab \n]{0,30}") {
            prop_assert_eq!(highlight(&a, &b).to_text(), a);
        }
    }
}
