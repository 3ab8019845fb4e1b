//! Department entity model.
//!
//! Departments own categories and receive assigned complaints. They are
//! reference data seeded by migration; there is no create/update surface.

use serde::Serialize;
use sqlx::FromRow;

use civica_core::types::{DbId, Timestamp};

/// A municipal department responsible for a class of complaints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: Timestamp,
}
