//! Complaint entity models, DTOs, and query parameter types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civica_core::status::ComplaintStatus;
use civica_core::types::{DbId, Timestamp};

/// A citizen-submitted civic issue report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Complaint {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub status: ComplaintStatus,
    pub priority: i16,
    pub ai_detected_category: Option<String>,
    pub ai_category_confidence: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

/// DTO for inserting a new complaint.
///
/// Built by the intake pipeline, not deserialized directly from a
/// request: priority, department, and the AI fields are computed.
#[derive(Debug, Clone)]
pub struct CreateComplaint {
    pub user_id: DbId,
    pub category_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub priority: i16,
    pub ai_detected_category: Option<String>,
    pub ai_category_confidence: Option<f64>,
}

/// Filter parameters for listing complaints.
///
/// `user_id = None` means no owner restriction (admin view).
#[derive(Debug, Clone, Default)]
pub struct ComplaintQuery {
    pub user_id: Option<DbId>,
    pub status: Option<ComplaintStatus>,
    pub category_id: Option<DbId>,
}

/// Aggregate counts over the current complaint set.
///
/// Computed by scanning (status, priority) pairs at read time; there is
/// no materialized aggregate to go stale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplaintStats {
    pub total: i64,
    pub pending: i64,
    pub assigned: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub rejected: i64,
    pub high_priority: i64,
}
