//! Handlers for the `/complaints` resource: multipart intake, triage
//! listing, status/assignment mutations, and the per-complaint history
//! log.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use civica_core::error::CoreError;
use civica_core::roles::ROLE_ADMIN;
use civica_core::status::ComplaintStatus;
use civica_core::types::DbId;
use civica_db::models::complaint::{Complaint, ComplaintQuery};
use civica_db::models::history::HistoryEntry;
use civica_db::repositories::{ComplaintRepo, DepartmentRepo, HistoryRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::intake::{self, ImageUpload, IntakeRequest};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for listing complaints.
///
/// `user_id` identifies the caller; the caller's role (from their
/// profile row) decides whether the listing is restricted to their own
/// complaints. `status`/`category` filters apply to admin listings;
/// the literal `all` is accepted and means "no filter".
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub user_id: DbId,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// Body for `PATCH /complaints/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ComplaintStatus,
    pub actor_id: Option<DbId>,
}

/// Body for `PATCH /complaints/{id}/assign`.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub department_id: DbId,
    pub actor_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Create (multipart intake)
// ---------------------------------------------------------------------------

/// POST /api/v1/complaints
///
/// Multipart form: `user_id`, `title`, `description`, `location`
/// (required), `category_id`, `latitude`, `longitude` (optional), and an
/// optional `image` file part. Runs the full intake pipeline.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Complaint>>)> {
    let request = collect_intake_request(multipart).await?;
    let complaint = intake::create_complaint(&state, request).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(complaint))))
}

/// Collect multipart fields into an [`IntakeRequest`].
///
/// Only field presence and basic shape are checked here; semantic
/// validation belongs to the intake pipeline.
async fn collect_intake_request(mut multipart: Multipart) -> AppResult<IntakeRequest> {
    let mut user_id: Option<DbId> = None;
    let mut title = None;
    let mut description = None;
    let mut location = None;
    let mut category_id: Option<DbId> = None;
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload.jpg").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some(ImageUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "user_id" => user_id = Some(parse_field(&name, field).await?),
            "category_id" => category_id = Some(parse_field(&name, field).await?),
            "latitude" => latitude = Some(parse_field(&name, field).await?),
            "longitude" => longitude = Some(parse_field(&name, field).await?),
            "title" => title = Some(text_field(field).await?),
            "description" => description = Some(text_field(field).await?),
            "location" => location = Some(text_field(field).await?),
            _ => {} // ignore unknown fields
        }
    }

    let user_id = user_id
        .ok_or_else(|| CoreError::Validation("user_id is required".to_string()))?;

    Ok(IntakeRequest {
        user_id,
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        location: location.unwrap_or_default(),
        category_id,
        latitude,
        longitude,
        image,
    })
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn parse_field<T: std::str::FromStr>(
    name: &str,
    field: axum::extract::multipart::Field<'_>,
) -> AppResult<T> {
    text_field(field).await?.trim().parse::<T>().map_err(|_| {
        AppError::Core(CoreError::Validation(format!("Invalid value for {name}")))
    })
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

/// GET /api/v1/complaints
///
/// Citizens see only their own complaints; admins see all and may filter
/// by status and category. Ordered by priority descending, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Complaint>>>> {
    let caller = ProfileRepo::find_by_id(&state.pool, params.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Profile",
            id: params.user_id,
        })?;

    let mut query = ComplaintQuery::default();
    if caller.role != ROLE_ADMIN {
        query.user_id = Some(caller.id);
    }
    if let Some(status) = params.status.filter(|s| s != "all") {
        query.status = Some(status.parse::<ComplaintStatus>().map_err(AppError::Core)?);
    }
    if let Some(category) = params.category.filter(|c| c != "all") {
        let id: DbId = category
            .parse()
            .map_err(|_| CoreError::Validation("Invalid category filter".to_string()))?;
        query.category_id = Some(id);
    }

    let complaints = ComplaintRepo::list(&state.pool, &query).await?;
    Ok(Json(DataResponse::new(complaints)))
}

/// GET /api/v1/complaints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    let complaint = ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;
    Ok(Json(DataResponse::new(complaint)))
}

// ---------------------------------------------------------------------------
// Triage mutations
// ---------------------------------------------------------------------------

/// PATCH /api/v1/complaints/{id}/status
///
/// Sets a new status (any transition is allowed). Resolving stamps
/// `resolved_at`. Appends one `status_changed` history entry.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    let updated = ComplaintRepo::update_status(&state.pool, id, request.status, request.actor_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;
    Ok(Json(DataResponse::new(updated)))
}

/// PATCH /api/v1/complaints/{id}/assign
///
/// Assigns the complaint to a department and forces its status to
/// `assigned`. Appends one `assigned` history entry.
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(request): Json<AssignRequest>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    // Unknown departments are a caller error, not a FK blowup.
    DepartmentRepo::find_by_id(&state.pool, request.department_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Department",
            id: request.department_id,
        })?;

    let updated =
        ComplaintRepo::assign_department(&state.pool, id, request.department_id, request.actor_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Complaint",
                id,
            })?;
    Ok(Json(DataResponse::new(updated)))
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// GET /api/v1/complaints/{id}/history
///
/// The complaint's append-only audit trail, newest first.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HistoryEntry>>>> {
    ComplaintRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Complaint",
            id,
        })?;

    let entries = HistoryRepo::list_by_complaint(&state.pool, id).await?;
    Ok(Json(DataResponse::new(entries)))
}
