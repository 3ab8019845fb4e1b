//! Citizen/admin profile entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use civica_core::types::{DbId, Timestamp};

/// A registered user. Citizens file complaints; admins triage them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    /// Defaults to `citizen` when omitted.
    pub role: Option<String>,
}
