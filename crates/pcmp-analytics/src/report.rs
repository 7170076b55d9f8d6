//! Human-readable comparison report.
//!
//! Combines stats, similarity and per-model token estimates for both
//! prompts into one value for terminal or JSON output.

use serde::Serialize;

use crate::estimator::{estimate_all, ModelEstimate};
use crate::similarity::compute_similarity;
use crate::stats::{compute_stats, TextStats};

/// Full comparison of two prompts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub stats_a: TextStats,
    pub stats_b: TextStats,
    pub delta: TextStats,
    pub similarity: u8,
    pub estimates_a: Vec<ModelEstimate>,
    pub estimates_b: Vec<ModelEstimate>,
}

impl ComparisonReport {
    pub fn new(prompt_a: &str, prompt_b: &str) -> Self {
        let stats_a = compute_stats(prompt_a);
        let stats_b = compute_stats(prompt_b);

        Self {
            stats_a,
            stats_b,
            delta: stats_a.delta(&stats_b),
            similarity: compute_similarity(prompt_a, prompt_b),
            estimates_a: estimate_all(prompt_a),
            estimates_b: estimate_all(prompt_b),
        }
    }
}
