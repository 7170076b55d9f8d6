//! Lexical similarity between two prompts.
//!
//! Jaccard overlap of the case-folded word sets, as a rounded percentage.

use std::collections::HashSet;

use crate::whitespace;

/// Similarity percentage in `0..=100`.
pub fn compute_similarity(text_a: &str, text_b: &str) -> u8 {
    if whitespace::is_blank(text_a) || whitespace::is_blank(text_b) {
        return 0;
    }

    let lower_a = text_a.to_lowercase();
    let lower_b = text_b.to_lowercase();
    let set_a = word_set(&lower_a);
    let set_b = word_set(&lower_b);

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    ((intersection as f64 / union as f64) * 100.0).round() as u8
}

/// Unique pieces of `text` split on whitespace runs.
///
/// The text is not trimmed first, so leading or trailing whitespace yields
/// an empty piece that takes part in the overlap like any other word.
fn word_set(text: &str) -> HashSet<&str> {
    let mut set: HashSet<&str> = whitespace::words(text).collect();
    let starts_blank = text.chars().next().is_some_and(whitespace::is_whitespace);
    let ends_blank = text.chars().next_back().is_some_and(whitespace::is_whitespace);
    if starts_blank || ends_blank {
        set.insert("");
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute_similarity("", "anything"), 0);
        assert_eq!(compute_similarity("anything", "   \n"), 0);
    }

    #[test]
    fn test_browser_whitespace_rules() {
        assert_eq!(compute_similarity("\u{FEFF}", "anything"), 0);
        // U+0085 joins words instead of separating them.
        assert_eq!(compute_similarity("cat\u{0085}dog", "cat dog"), 0);
        assert_eq!(compute_similarity("cat\u{FEFF}dog", "cat dog"), 100);
    }

    #[test]
    fn test_identical_is_hundred() {
        assert_eq!(compute_similarity("x", "x"), 100);
        assert_eq!(compute_similarity("The quick fox", "the QUICK fox"), 100);
    }

    #[test]
    fn test_partial_overlap() {
        // {dog} / {cat, dog, bird}
        assert_eq!(compute_similarity("cat dog", "dog bird"), 33);
        // {b, c} / {a, b, c}
        assert_eq!(compute_similarity("a b c", "b c"), 67);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(compute_similarity("dog dog dog", "dog"), 100);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(compute_similarity("alpha beta", "gamma delta"), 0);
    }

    #[test]
    fn test_edge_whitespace_adds_empty_piece() {
        // {"", cat, dog} vs {dog, bird}: 1 / 4
        assert_eq!(compute_similarity(" cat dog", "dog bird"), 25);
        // both sides carry the empty piece: {"", x} vs {"", x}
        assert_eq!(compute_similarity("x\n", " x"), 100);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in "[a-dA-D \n]{0,40}", b in "[a-dA-D \n]{0,40}") {
            prop_assert_eq!(compute_similarity(&a, &b), compute_similarity(&b, &a));
        }

        #[test]
        fn prop_bounded(a in "\\PC{0,60}", b in "\\PC{0,60}") {
            prop_assert!(compute_similarity(&a, &b) <= 100);
        }

        #[test]
        fn prop_self_similarity(a in "[a-z]{1,8}( [a-z]{1,8}){0,6}") {
            prop_assert_eq!(compute_similarity(&a, &a), 100);
        }
    }
}
