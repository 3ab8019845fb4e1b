//! Handlers for the `/profiles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use civica_core::error::CoreError;
use civica_core::roles::VALID_ROLES;
use civica_core::types::DbId;
use civica_db::models::profile::{CreateProfile, Profile};
use civica_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /profiles`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// POST /api/v1/profiles
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Profile>>)> {
    request
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    if let Some(role) = &request.role {
        if !VALID_ROLES.contains(&role.as_str()) {
            return Err(CoreError::Validation(format!("Unknown role: {role}")).into());
        }
    }

    let profile = ProfileRepo::insert(
        &state.pool,
        &CreateProfile {
            email: request.email,
            full_name: request.full_name,
            phone: request.phone,
            role: request.role,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(profile))))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id,
        })?;
    Ok(Json(DataResponse::new(profile)))
}
