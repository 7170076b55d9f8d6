//! Prompt Compare Web Server
//!
//! Axum-based REST API for projects, saved comparisons and the analytics core.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use pcmp_db::DbPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/test", get(routes::health::health_check))
        // Projects
        .route(
            "/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(routes::projects::get_project)
                .put(routes::projects::update_project)
                .delete(routes::projects::delete_project),
        )
        // Saved comparisons
        .route(
            "/prompt-comparisons",
            get(routes::comparisons::list_comparisons).post(routes::comparisons::create_comparison),
        )
        .route(
            "/prompt-comparisons/{id}",
            get(routes::comparisons::get_comparison)
                .put(routes::comparisons::update_comparison)
                .delete(routes::comparisons::delete_comparison),
        )
        // Analytics
        .route("/models", get(routes::analytics::list_models))
        .route("/analyze", post(routes::analytics::analyze))
        .route("/diff", post(routes::analytics::diff))
        .route("/estimate", post(routes::analytics::estimate))
        .route("/export", post(routes::analytics::export));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(db: Arc<DbPool>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
