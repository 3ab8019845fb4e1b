//! Repository for the `complaints` table.
//!
//! Mutations that must leave an audit trail (create, status change,
//! assignment) run the row write and the history append inside one
//! transaction, so a crash can never produce a complaint whose history
//! is missing the corresponding entry.

use sqlx::PgPool;

use civica_core::history::actions;
use civica_core::priority::HIGH_PRIORITY_THRESHOLD;
use civica_core::status::ComplaintStatus;
use civica_core::types::DbId;

use crate::models::complaint::{Complaint, ComplaintQuery, ComplaintStats, CreateComplaint};
use crate::models::history::CreateHistoryEntry;
use crate::repositories::HistoryRepo;

/// Column list for `complaints` SELECT queries.
const COLUMNS: &str = "\
    id, user_id, category_id, department_id, title, description, \
    location, latitude, longitude, image_url, status, priority, \
    ai_detected_category, ai_category_confidence, \
    created_at, updated_at, resolved_at";

/// Provides CRUD and aggregate operations for complaints.
pub struct ComplaintRepo;

impl ComplaintRepo {
    /// Insert a new complaint (status `pending`) together with its
    /// `created` history entry, atomically.
    ///
    /// The actor of the `created` entry is the owning citizen.
    pub async fn create_with_history(
        pool: &PgPool,
        complaint: &CreateComplaint,
    ) -> Result<Complaint, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO complaints \
             (user_id, category_id, department_id, title, description, \
              location, latitude, longitude, image_url, status, priority, \
              ai_detected_category, ai_category_confidence) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );

        let created = sqlx::query_as::<_, Complaint>(&query)
            .bind(complaint.user_id)
            .bind(complaint.category_id)
            .bind(complaint.department_id)
            .bind(&complaint.title)
            .bind(&complaint.description)
            .bind(&complaint.location)
            .bind(complaint.latitude)
            .bind(complaint.longitude)
            .bind(&complaint.image_url)
            .bind(ComplaintStatus::Pending)
            .bind(complaint.priority)
            .bind(&complaint.ai_detected_category)
            .bind(complaint.ai_category_confidence)
            .fetch_one(&mut *tx)
            .await?;

        HistoryRepo::insert(
            &mut *tx,
            &CreateHistoryEntry {
                complaint_id: created.id,
                action: actions::CREATED.to_string(),
                old_value: None,
                new_value: Some(ComplaintStatus::Pending.to_string()),
                notes: None,
                actor_id: Some(complaint.user_id),
            },
        )
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Find a complaint by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Complaint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1");

        sqlx::query_as::<_, Complaint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List complaints matching the filter.
    ///
    /// Ordering is the triage queue order: priority descending, then
    /// creation time descending (ties surface the newest first).
    pub async fn list(
        pool: &PgPool,
        params: &ComplaintQuery,
    ) -> Result<Vec<Complaint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM complaints \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
               AND ($2::complaint_status IS NULL OR status = $2) \
               AND ($3::BIGINT IS NULL OR category_id = $3) \
             ORDER BY priority DESC, created_at DESC"
        );

        sqlx::query_as::<_, Complaint>(&query)
            .bind(params.user_id)
            .bind(params.status)
            .bind(params.category_id)
            .fetch_all(pool)
            .await
    }

    /// Set a new status, stamping `resolved_at` when the new status is
    /// `resolved`, and append the `status_changed` history entry in the
    /// same transaction.
    ///
    /// Returns `None` if the complaint does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ComplaintStatus,
        actor_id: Option<DbId>,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Complaint>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let update = format!(
            "UPDATE complaints SET \
               status = $2, \
               resolved_at = CASE WHEN $2 = 'resolved'::complaint_status \
                                  THEN NOW() ELSE resolved_at END, \
               updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Complaint>(&update)
            .bind(id)
            .bind(status)
            .fetch_one(&mut *tx)
            .await?;

        HistoryRepo::insert(
            &mut *tx,
            &CreateHistoryEntry {
                complaint_id: id,
                action: actions::STATUS_CHANGED.to_string(),
                old_value: Some(existing.status.to_string()),
                new_value: Some(status.to_string()),
                notes: None,
                actor_id,
            },
        )
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Assign a complaint to a department, forcing its status to
    /// `assigned`, and append the `assigned` history entry in the same
    /// transaction.
    ///
    /// Returns `None` if the complaint does not exist.
    pub async fn assign_department(
        pool: &PgPool,
        id: DbId,
        department_id: DbId,
        actor_id: Option<DbId>,
    ) -> Result<Option<Complaint>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM complaints WHERE id = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Complaint>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let update = format!(
            "UPDATE complaints SET \
               department_id = $2, \
               status = 'assigned'::complaint_status, \
               updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Complaint>(&update)
            .bind(id)
            .bind(department_id)
            .fetch_one(&mut *tx)
            .await?;

        HistoryRepo::insert(
            &mut *tx,
            &CreateHistoryEntry {
                complaint_id: id,
                action: actions::ASSIGNED.to_string(),
                old_value: existing.department_id.map(|d| d.to_string()),
                new_value: Some(department_id.to_string()),
                notes: None,
                actor_id,
            },
        )
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Compute aggregate stats by scanning (status, priority) pairs.
    ///
    /// Always fresh at read time; the complaint set is small enough that
    /// a scan beats maintaining a materialized aggregate.
    pub async fn stats(pool: &PgPool) -> Result<ComplaintStats, sqlx::Error> {
        let rows = sqlx::query_as::<_, (ComplaintStatus, i16)>(
            "SELECT status, priority FROM complaints",
        )
        .fetch_all(pool)
        .await?;

        let mut stats = ComplaintStats {
            total: rows.len() as i64,
            ..ComplaintStats::default()
        };

        for (status, priority) in rows {
            match status {
                ComplaintStatus::Pending => stats.pending += 1,
                ComplaintStatus::Assigned => stats.assigned += 1,
                ComplaintStatus::InProgress => stats.in_progress += 1,
                ComplaintStatus::Resolved => stats.resolved += 1,
                ComplaintStatus::Rejected => stats.rejected += 1,
            }
            if priority >= HIGH_PRIORITY_THRESHOLD {
                stats.high_priority += 1;
            }
        }

        Ok(stats)
    }
}
