//! Handlers for the `/departments` resource (read-only reference data).

use axum::extract::State;
use axum::Json;

use civica_db::models::department::Department;
use civica_db::repositories::DepartmentRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/departments
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse::new(departments)))
}
