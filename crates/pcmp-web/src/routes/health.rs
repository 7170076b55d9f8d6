//! Liveness check.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct TestResponse {
    pub message: &'static str,
    pub timestamp: String,
}

pub async fn health_check() -> Json<TestResponse> {
    tracing::debug!("Test endpoint called");
    Json(TestResponse {
        message: "API is working!",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
