//! Handlers for the `/categories` resource (read-only reference data).

use axum::extract::State;
use axum::Json;

use civica_db::models::category::Category;
use civica_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse::new(categories)))
}
