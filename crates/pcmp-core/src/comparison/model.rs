//! Saved comparison models.

use pcmp_analytics::{compute_similarity, compute_stats, TextStats};
use pcmp_db::queries::comparisons::ComparisonRow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Two prompts saved side by side, optionally inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptComparison {
    pub id: String,
    pub title: String,
    pub prompt_a: String,
    pub prompt_b: String,
    /// Free-form JSON; usually a [`ComparisonMetadata`].
    pub metadata: Option<Value>,
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl PromptComparison {
    /// Create from database row.
    pub fn from_row(row: ComparisonRow) -> Self {
        let metadata = row.metadata.as_deref().and_then(|raw| match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(comparison_id = %row.id, error = %e, "Ignoring unreadable comparison metadata");
                None
            }
        });

        Self {
            id: row.id,
            title: row.title,
            prompt_a: row.prompt_a,
            prompt_b: row.prompt_b,
            metadata,
            project_id: row.project_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    /// Metadata parsed as derived stats, when it has that shape.
    pub fn derived_metadata(&self) -> Option<ComparisonMetadata> {
        self.metadata
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Stats and similarity stored alongside a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetadata {
    pub stats_a: TextStats,
    pub stats_b: TextStats,
    pub similarity: u8,
}

impl ComparisonMetadata {
    /// Derive metadata from the two prompts.
    pub fn derive(prompt_a: &str, prompt_b: &str) -> Self {
        Self {
            stats_a: compute_stats(prompt_a),
            stats_b: compute_stats(prompt_b),
            similarity: compute_similarity(prompt_a, prompt_b),
        }
    }
}

/// Input for a new comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewComparison {
    pub title: String,
    pub prompt_a: String,
    pub prompt_b: String,
    /// Stored verbatim when present; derived from the prompts otherwise.
    pub metadata: Option<Value>,
    pub project_id: Option<String>,
}

/// Partial comparison update. `None` leaves a field unchanged; for the
/// nullable fields, `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonUpdate {
    pub title: Option<String>,
    pub prompt_a: Option<String>,
    pub prompt_b: Option<String>,
    pub metadata: Option<Option<Value>>,
    pub project_id: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(metadata: Option<&str>) -> ComparisonRow {
        ComparisonRow {
            id: "c1".to_string(),
            title: "Title".to_string(),
            prompt_a: "a".to_string(),
            prompt_b: "b".to_string(),
            metadata: metadata.map(str::to_string),
            project_id: None,
            created_at: "2024-01-01T00:00:00.000000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn test_from_row_parses_metadata() {
        let comparison = PromptComparison::from_row(row(Some(r#"{"similarity": 50}"#)));
        assert_eq!(comparison.metadata, Some(serde_json::json!({"similarity": 50})));
        assert!(comparison.derived_metadata().is_none());
    }

    #[test]
    fn test_from_row_drops_unreadable_metadata() {
        let comparison = PromptComparison::from_row(row(Some("{not json")));
        assert!(comparison.metadata.is_none());
        assert_eq!(comparison.title, "Title");
    }

    #[test]
    fn test_derive_metadata() {
        let metadata = ComparisonMetadata::derive("cat dog", "dog bird");
        assert_eq!(metadata.similarity, 33);
        assert_eq!(metadata.stats_b, compute_stats("dog bird"));
    }
}
