//! Handler for the dashboard stats endpoint.

use axum::extract::State;
use axum::Json;

use civica_db::models::complaint::ComplaintStats;
use civica_db::repositories::ComplaintRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Complaint counts per status bucket plus the high-priority count,
/// computed fresh on every call.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DataResponse<ComplaintStats>>> {
    let stats = ComplaintRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse::new(stats)))
}
