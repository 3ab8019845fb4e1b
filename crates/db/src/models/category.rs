//! Complaint category entity model.

use serde::Serialize;
use sqlx::FromRow;

use civica_core::types::{DbId, Timestamp};

/// A complaint category, owned by at most one department.
///
/// `name` is the internal identifier the priority heuristic and the AI
/// classifier speak (`pothole`, `garbage_overflow`, ...); `display_name`
/// is what citizens see. `ai_keywords` are the hint terms the external
/// classifier was trained against, kept for reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
    pub department_id: Option<DbId>,
    pub ai_keywords: Option<Vec<String>>,
    pub created_at: Timestamp,
}
