//! Route definitions for complaint categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Category routes mounted at `/categories`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(category::list))
}
