//! Token count and cost estimation.
//!
//! This is a heuristic, not a tokenizer: the word count is scaled by a
//! per-model tokens-per-word ratio and a flat overhead is added for code
//! fences, inline code, tag-like spans and markdown punctuation. The
//! constants are kept as they are so estimates stay stable across versions;
//! they are not meant to track any provider's real tokenizer.

use serde::Serialize;

use crate::pricing::{self, CatalogEntry, ModelPricing};
use crate::stats::count_words;
use crate::whitespace;

const CODE_BLOCK_TOKENS: u64 = 5;
const INLINE_CODE_TOKENS: u64 = 2;
const TAG_TOKENS: u64 = 2;
/// One extra token per this many markdown punctuation characters.
const MARKDOWN_CHARS_PER_TOKEN: u64 = 10;
const MARKDOWN_CHARS: &[u8] = b"*_#[]()";

/// Estimated token count and input cost for a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenEstimate {
    pub tokens: u64,
    pub cost: f64,
    pub currency: &'static str,
}

impl TokenEstimate {
    fn zero() -> Self {
        Self {
            tokens: 0,
            cost: 0.0,
            currency: "USD",
        }
    }
}

/// Estimate for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelEstimate {
    pub model: CatalogEntry,
    pub estimate: TokenEstimate,
}

/// Structural features that add token overhead.
///
/// Each category is counted on its own as non-overlapping, leftmost matches
/// over the untrimmed text. All scanners run in linear time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructureCounts {
    pub code_blocks: usize,
    pub inline_code: usize,
    pub tags: usize,
    pub markdown_chars: usize,
}

impl StructureCounts {
    pub fn scan(text: &str) -> Self {
        let bytes = text.as_bytes();
        Self {
            code_blocks: count_code_blocks(bytes),
            inline_code: count_delimited(bytes, b'`', b'`'),
            tags: count_delimited(bytes, b'<', b'>'),
            markdown_chars: bytes.iter().filter(|b| MARKDOWN_CHARS.contains(b)).count(),
        }
    }

    /// Extra tokens contributed by these features.
    pub fn overhead(&self) -> u64 {
        self.code_blocks as u64 * CODE_BLOCK_TOKENS
            + self.inline_code as u64 * INLINE_CODE_TOKENS
            + self.tags as u64 * TAG_TOKENS
            + self.markdown_chars as u64 / MARKDOWN_CHARS_PER_TOKEN
    }
}

/// Estimate tokens and cost of `text` for a model.
pub fn estimate(text: &str, model: &ModelPricing) -> TokenEstimate {
    if whitespace::is_blank(text) {
        return TokenEstimate::zero();
    }

    let words = count_words(text) as f64;
    let base = (words * model.average_tokens_per_word).ceil() as u64;
    let tokens = base + StructureCounts::scan(text).overhead();

    let cost = (tokens as f64 / 1000.0) * model.input_cost_per_1k_tokens;

    TokenEstimate {
        tokens,
        cost: round_to_micros(cost),
        currency: "USD",
    }
}

/// Estimate by catalog key, using the default model for unknown keys.
pub fn estimate_for_key(text: &str, key: &str) -> ModelEstimate {
    let model = *pricing::resolve_model(key);
    ModelEstimate {
        model,
        estimate: estimate(text, &model.pricing),
    }
}

/// Estimates for every catalog model, in catalog order.
pub fn estimate_all(text: &str) -> Vec<ModelEstimate> {
    pricing::all_models()
        .iter()
        .map(|model| ModelEstimate {
            model: *model,
            estimate: estimate(text, &model.pricing),
        })
        .collect()
}

/// Round to six decimals from the exact decimal expansion of `value`.
///
/// Scaling by 1e6 first can push a value just below a half-micro boundary
/// onto it and round the wrong way.
fn round_to_micros(value: f64) -> f64 {
    format!("{:.6}", value).parse().unwrap_or(value)
}

fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Count "```...```" blocks, pairing each fence with the nearest following one.
fn count_code_blocks(bytes: &[u8]) -> usize {
    const FENCE: &[u8] = b"```";

    let mut count = 0;
    let mut pos = 0;
    while let Some(open) = find(bytes, pos, FENCE) {
        match find(bytes, open + FENCE.len(), FENCE) {
            Some(close) => {
                count += 1;
                pos = close + FENCE.len();
            }
            // No closing fence after this one means none after any later one either.
            None => break,
        }
    }
    count
}

/// Count spans `open`, one or more bytes other than `close`, then `close`.
fn count_delimited(bytes: &[u8], open: u8, close: u8) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != open || i + 1 >= bytes.len() || bytes[i + 1] == close {
            i += 1;
            continue;
        }
        match bytes[i + 2..].iter().position(|&b| b == close) {
            Some(offset) => {
                count += 1;
                i += 2 + offset + 1;
            }
            None => break,
        }
    }
    count
}
