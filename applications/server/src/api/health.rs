/// Liveness route
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    /// Tracks currently in the library; proves storage is reachable
    pub tracks: usize,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>> {
    let tracks = state.catalog.list_all_track_ids().await?.len();

    Ok(Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tracks,
    }))
}
