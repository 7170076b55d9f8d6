//! Project route handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use pcmp_core::project::{self, model::Project, model::ProjectUpdate};
use serde::Deserialize;
use tracing::debug;

use super::{api_error, double_option, user_id, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

pub async fn list_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Project>>, ApiError> {
    debug!(user_id = user_id(&headers), "Listing projects");
    let projects = project::list_projects(&state.db).map_err(api_error)?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    debug!(user_id = user_id(&headers), "Creating project");
    let project = project::create_project(&state.db, &req.name, req.description.as_deref()).map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = project::get_project(&state.db, &id).map_err(api_error)?;
    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    debug!(user_id = user_id(&headers), project_id = %id, "Updating project");
    let update = ProjectUpdate {
        name: req.name,
        description: req.description,
    };
    let project = project::update_project(&state.db, &id, update).map_err(api_error)?;
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = user_id(&headers), project_id = %id, "Deleting project");
    project::delete_project(&state.db, &id).map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, send, send_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_project_lifecycle() {
        let app = app();

        let (status, created) = send_json(
            &app,
            "POST",
            "/api/projects",
            Some(json!({"name": "Support bot", "description": "Tone experiments"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Support bot");
        assert!(created["createdAt"].is_string());
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = send_json(&app, "GET", &format!("/api/projects/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["description"], "Tone experiments");

        let (status, updated) = send_json(
            &app,
            "PUT",
            &format!("/api/projects/{}", id),
            Some(json!({"description": null})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Support bot");
        assert!(updated["description"].is_null());

        let (status, list) = send_json(&app, "GET", "/api/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, "DELETE", &format!("/api/projects/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _) = send(&app, "GET", &format!("/api/projects/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_project_errors() {
        let app = app();

        let (status, body) = send(&app, "POST", "/api/projects", Some(json!({"name": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("must not be empty"));

        let (status, _) = send(&app, "PUT", "/api/projects/missing", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/api/projects/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
