//! Repository for the `complaint_history` table (append-only).

use sqlx::PgPool;

use civica_core::types::DbId;

use crate::models::history::{CreateHistoryEntry, HistoryEntry};

/// Column list for `complaint_history` SELECT queries.
const COLUMNS: &str =
    "id, complaint_id, action, old_value, new_value, notes, actor_id, created_at";

/// Provides append and query operations for complaint history.
///
/// There are deliberately no update or delete methods: history entries
/// are immutable once written.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a history entry.
    ///
    /// Takes any executor so the append can join the transaction of the
    /// mutation it records.
    pub async fn insert(
        executor: impl sqlx::PgExecutor<'_>,
        entry: &CreateHistoryEntry,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO complaint_history \
             (complaint_id, action, old_value, new_value, notes, actor_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(entry.complaint_id)
            .bind(&entry.action)
            .bind(&entry.old_value)
            .bind(&entry.new_value)
            .bind(&entry.notes)
            .bind(entry.actor_id)
            .fetch_one(executor)
            .await
    }

    /// List the history for a complaint, newest first.
    pub async fn list_by_complaint(
        pool: &PgPool,
        complaint_id: DbId,
    ) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaint_history \
             WHERE complaint_id = $1 ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(complaint_id)
            .fetch_all(pool)
            .await
    }
}
