//! Complaint history entity models and DTOs.
//!
//! History entries form an immutable append-only audit log per
//! complaint. They have no `updated_at` and no update DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civica_core::types::{DbId, Timestamp};

/// A single audit record of a complaint state change. Immutable once
/// created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub complaint_id: DbId,
    pub action: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub notes: Option<String>,
    pub actor_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for appending a history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoryEntry {
    pub complaint_id: DbId,
    pub action: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub notes: Option<String>,
    pub actor_id: Option<DbId>,
}
