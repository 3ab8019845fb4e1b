//! Repository for the `profiles` table.

use sqlx::PgPool;

use civica_core::roles::ROLE_CITIZEN;
use civica_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile};

/// Column list for `profiles` SELECT queries.
const COLUMNS: &str = "id, email, full_name, phone, role, created_at, updated_at";

/// Provides insert and lookup operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile. Role defaults to `citizen` when omitted.
    pub async fn insert(pool: &PgPool, profile: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, full_name, phone, role) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, Profile>(&query)
            .bind(&profile.email)
            .bind(&profile.full_name)
            .bind(&profile.phone)
            .bind(profile.role.as_deref().unwrap_or(ROLE_CITIZEN))
            .fetch_one(pool)
            .await
    }

    /// Find a profile by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");

        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
