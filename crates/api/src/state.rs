use std::sync::Arc;

use civica_classifier::ClassifierClient;
use civica_storage::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: civica_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage for complaint images.
    pub storage: Arc<dyn ObjectStorage>,
    /// Best-effort image classification client.
    pub classifier: Arc<ClassifierClient>,
}
