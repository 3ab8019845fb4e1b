//! Repository for the `complaint_categories` table.

use sqlx::PgPool;

use civica_core::types::DbId;

use crate::models::category::Category;

/// Column list for `complaint_categories` SELECT queries.
const COLUMNS: &str = "id, name, display_name, department_id, ai_keywords, created_at";

/// Provides lookup operations for complaint categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by display name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaint_categories ORDER BY display_name");

        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by id. A miss is a valid `None`, never an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaint_categories WHERE id = $1");

        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its internal name (exact match).
    ///
    /// Used to resolve the label returned by the image classifier to a
    /// category row.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaint_categories WHERE name = $1");

        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
