pub mod category;
pub mod complaint;
pub mod department;
pub mod health;
pub mod profile;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /complaints                      create (POST, multipart), list (GET)
/// /complaints/{id}                 get (GET)
/// /complaints/{id}/status          update status (PATCH)
/// /complaints/{id}/assign          assign department (PATCH)
/// /complaints/{id}/history         audit trail (GET)
///
/// /categories                      list (GET)
/// /departments                     list (GET)
/// /stats                           dashboard counts (GET)
///
/// /profiles                        create (POST)
/// /profiles/{id}                   get (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/complaints", complaint::router())
        .nest("/categories", category::router())
        .nest("/departments", department::router())
        .nest("/profiles", profile::router())
        .nest("/stats", stats::router())
}
