//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Liveness plus a database round-trip. Always returns 200; a failing
/// database shows up as `db_healthy: false` so orchestrators can tell
/// "process up, dependency down" apart from "process down".
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = civica_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
