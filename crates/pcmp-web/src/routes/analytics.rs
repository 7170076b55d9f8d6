//! Stateless analytics endpoints.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use pcmp_analytics::{
    all_models, build_export, estimate_all, estimate_for_key, highlight_pair, CatalogEntry, DiffAnnotation,
    ModelEstimate, EXPORT_FILE_NAME,
};
use pcmp_core::comparison::model::ComparisonMetadata;
use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPair {
    pub prompt_a: String,
    pub prompt_b: String,
}

#[derive(Deserialize)]
pub struct EstimateRequest {
    pub text: String,
    pub model: Option<String>,
}

#[derive(Serialize)]
pub struct DiffResponse {
    pub a: DiffAnnotation,
    pub b: DiffAnnotation,
}

/// One estimate when a model was requested, every catalog entry otherwise.
#[derive(Serialize)]
#[serde(untagged)]
pub enum EstimateResponse {
    Single(ModelEstimate),
    All(Vec<ModelEstimate>),
}

pub async fn list_models() -> Json<&'static [CatalogEntry]> {
    Json(all_models())
}

pub async fn analyze(Json(req): Json<PromptPair>) -> Json<ComparisonMetadata> {
    Json(ComparisonMetadata::derive(&req.prompt_a, &req.prompt_b))
}

pub async fn diff(Json(req): Json<PromptPair>) -> Json<DiffResponse> {
    let (a, b) = highlight_pair(&req.prompt_a, &req.prompt_b);
    Json(DiffResponse { a, b })
}

pub async fn estimate(Json(req): Json<EstimateRequest>) -> Json<EstimateResponse> {
    match req.model {
        Some(key) => Json(EstimateResponse::Single(estimate_for_key(&req.text, &key))),
        None => Json(EstimateResponse::All(estimate_all(&req.text))),
    }
}

pub async fn export(Json(req): Json<PromptPair>) -> Result<impl IntoResponse, ApiError> {
    let export = build_export(&req.prompt_a, &req.prompt_b);
    let body = export
        .to_json_pretty()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
