//! Downloadable snapshot of a comparison.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::similarity::compute_similarity;
use crate::stats::{compute_stats, TextStats};

/// Suggested file name for exported comparisons.
pub const EXPORT_FILE_NAME: &str = "prompt-comparison.json";

/// Both prompts with their derived stats and similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExport {
    pub prompt_a: String,
    pub prompt_b: String,
    pub stats_a: TextStats,
    pub stats_b: TextStats,
    pub similarity: u8,
    /// RFC 3339 UTC, millisecond precision.
    pub timestamp: String,
}

impl ComparisonExport {
    /// Two-space indented JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build an export of the two prompts, stamped with the current time.
pub fn build_export(prompt_a: &str, prompt_b: &str) -> ComparisonExport {
    ComparisonExport {
        prompt_a: prompt_a.to_string(),
        prompt_b: prompt_b.to_string(),
        stats_a: compute_stats(prompt_a),
        stats_b: compute_stats(prompt_b),
        similarity: compute_similarity(prompt_a, prompt_b),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
