//! Snapshot save/load endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::snapshot::SnapshotInfo};

/// Save the whole library to the configured snapshot file
#[utoipa::path(
    post,
    path = "/snapshot/save",
    tag = "snapshot",
    responses(
        (status = 200, description = "Snapshot written", body = SnapshotInfo),
        (status = 400, description = "No snapshot path configured")
    )
)]
pub async fn save_snapshot(State(state): State<crate::AppState>) -> AppResult<Json<SnapshotInfo>> {
    Ok(Json(state.services.storage.save().await?))
}

/// Replace the library with the configured snapshot file
#[utoipa::path(
    post,
    path = "/snapshot/load",
    tag = "snapshot",
    responses(
        (status = 200, description = "Snapshot loaded", body = SnapshotInfo),
        (status = 400, description = "No snapshot path configured"),
        (status = 422, description = "Snapshot file is invalid")
    )
)]
pub async fn load_snapshot(State(state): State<crate::AppState>) -> AppResult<Json<SnapshotInfo>> {
    Ok(Json(state.services.storage.load().await?))
}
