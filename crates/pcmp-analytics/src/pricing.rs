//! Static pricing catalog for token cost estimates.

use serde::Serialize;

/// Input pricing and word-to-token ratio for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    pub name: &'static str,
    pub provider: &'static str,
    /// USD per 1000 input tokens.
    pub input_cost_per_1k_tokens: f64,
    pub average_tokens_per_word: f64,
}

/// A catalog entry: lookup key plus pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    #[serde(flatten)]
    pub pricing: ModelPricing,
}

/// Key used when a requested model is unknown.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        key: "gpt-4o-mini",
        pricing: ModelPricing {
            name: "GPT-4o Mini",
            provider: "OpenAI",
            input_cost_per_1k_tokens: 0.000150,
            average_tokens_per_word: 1.3,
        },
    },
    CatalogEntry {
        key: "gemini-2.0-flash",
        pricing: ModelPricing {
            name: "Gemini 2.0 Flash",
            provider: "Google",
            input_cost_per_1k_tokens: 0.000075,
            average_tokens_per_word: 1.2,
        },
    },
    CatalogEntry {
        key: "claude-3-5-sonnet",
        pricing: ModelPricing {
            name: "Claude 3.5 Sonnet",
            provider: "Anthropic",
            input_cost_per_1k_tokens: 0.003,
            average_tokens_per_word: 1.25,
        },
    },
];

/// All catalog entries in display order.
pub fn all_models() -> &'static [CatalogEntry] {
    CATALOG
}

/// Look up a model by key.
pub fn get_model(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}

/// Look up a model, falling back to [`DEFAULT_MODEL`] for unknown keys.
pub fn resolve_model(key: &str) -> &'static CatalogEntry {
    get_model(key).unwrap_or_else(default_model)
}

pub fn default_model() -> &'static CatalogEntry {
    &CATALOG[0]
}
