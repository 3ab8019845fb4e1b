//! Route definitions for departments.

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Department routes mounted at `/departments`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(department::list))
}
