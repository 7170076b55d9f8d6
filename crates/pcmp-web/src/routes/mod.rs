//! Route handlers.

pub mod analytics;
pub mod comparisons;
pub mod health;
pub mod projects;

use axum::http::{HeaderMap, StatusCode};
use pcmp_core::PcmpError;
use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Identity recorded when a request carries no `x-user-id` header.
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Error half of every handler result: status plus plain-text body.
pub type ApiError = (StatusCode, String);

/// Map a service error onto an HTTP status.
pub(crate) fn api_error(err: PcmpError) -> ApiError {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if matches!(err, PcmpError::ValidationError(_)) {
        StatusCode::BAD_REQUEST
    } else {
        warn!(error = %err, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, err.to_string())
}

/// Placeholder caller identity, used for logging only.
pub(crate) fn user_id(headers: &HeaderMap) -> &str {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
