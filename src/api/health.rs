//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Catalog lines held
    pub books: usize,
    /// Registered users
    pub users: usize,
    /// Whether a snapshot file is configured
    pub persistence: bool,
    /// Whether every change is saved to the snapshot file
    pub autosave: bool,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: state.services.catalog.list_books().await.len(),
        users: state.services.users.list_users().await.len(),
        persistence: state.config.storage.snapshot_path.is_some(),
        autosave: state.services.storage.autosave_enabled(),
    })
}
