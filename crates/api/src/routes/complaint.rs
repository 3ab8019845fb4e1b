//! Route definitions for the complaint intake and triage surface.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::complaint;
use crate::state::AppState;

/// Multipart body cap: the max image size plus headroom for the text
/// fields and multipart framing.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Complaint routes mounted at `/complaints`.
///
/// ```text
/// POST  /               -> create (multipart intake)
/// GET   /               -> list
/// GET   /{id}           -> get_by_id
/// PATCH /{id}/status    -> update_status
/// PATCH /{id}/assign    -> assign
/// GET   /{id}/history   -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(complaint::create).get(complaint::list))
        .route("/{id}", get(complaint::get_by_id))
        .route("/{id}/status", patch(complaint::update_status))
        .route("/{id}/assign", patch(complaint::assign))
        .route("/{id}/history", get(complaint::history))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
