//! Repository for the `departments` table (read-only reference data).

use sqlx::PgPool;

use civica_core::types::DbId;

use crate::models::department::Department;

/// Column list for `departments` SELECT queries.
const COLUMNS: &str = "id, name, description, contact_email, contact_phone, created_at";

/// Provides lookup operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments, alphabetically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name");

        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Find a department by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");

        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
