//! Centralized error types for Prompt Compare.

use pcmp_db::DbError;
use thiserror::Error;

/// Main error type for project and comparison operations.
#[derive(Error, Debug)]
pub enum PcmpError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Comparison not found: {0}")]
    ComparisonNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Prompt Compare operations.
pub type PcmpResult<T> = Result<T, PcmpError>;

impl PcmpError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_) | Self::ComparisonNotFound(_) | Self::Database(DbError::NotFound(_))
        )
    }
}
