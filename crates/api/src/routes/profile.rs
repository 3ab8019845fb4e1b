//! Route definitions for profiles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes mounted at `/profiles`.
///
/// ```text
/// POST /        -> create
/// GET  /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(profile::create))
        .route("/{id}", get(profile::get_by_id))
}
