//! Saved comparison route handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use pcmp_core::comparison::{
    self,
    model::{ComparisonUpdate, NewComparison, PromptComparison},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{api_error, double_option, user_id, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub project_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComparisonRequest {
    #[serde(default)]
    pub title: String,
    pub prompt_a: String,
    pub prompt_b: String,
    pub metadata: Option<Value>,
    pub project_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComparisonRequest {
    pub title: Option<String>,
    pub prompt_a: Option<String>,
    pub prompt_b: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub metadata: Option<Option<Value>>,
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<String>>,
}

pub async fn list_comparisons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PromptComparison>>, ApiError> {
    // An empty `projectId=` means no filter.
    let project_id = query.project_id.as_deref().filter(|id| !id.is_empty());
    debug!(user_id = user_id(&headers), project_id = ?project_id, "Listing comparisons");
    let comparisons = comparison::list_comparisons(&state.db, project_id).map_err(api_error)?;
    Ok(Json(comparisons))
}

pub async fn create_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateComparisonRequest>,
) -> Result<(StatusCode, Json<PromptComparison>), ApiError> {
    debug!(user_id = user_id(&headers), "Saving comparison");
    let input = NewComparison {
        title: req.title,
        prompt_a: req.prompt_a,
        prompt_b: req.prompt_b,
        metadata: req.metadata,
        project_id: req.project_id,
    };
    let saved = comparison::create_comparison(&state.db, input).map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptComparison>, ApiError> {
    let found = comparison::get_comparison(&state.db, &id).map_err(api_error)?;
    Ok(Json(found))
}

pub async fn update_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateComparisonRequest>,
) -> Result<Json<PromptComparison>, ApiError> {
    debug!(user_id = user_id(&headers), comparison_id = %id, "Updating comparison");
    let update = ComparisonUpdate {
        title: req.title,
        prompt_a: req.prompt_a,
        prompt_b: req.prompt_b,
        metadata: req.metadata,
        project_id: req.project_id,
    };
    let updated = comparison::update_comparison(&state.db, &id, update).map_err(api_error)?;
    Ok(Json(updated))
}

pub async fn delete_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = user_id(&headers), comparison_id = %id, "Deleting comparison");
    comparison::delete_comparison(&state.db, &id).map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
