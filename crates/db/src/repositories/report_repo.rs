//! Repository for the `reports` table.
//!
//! Owner-scoped mutations filter on `(id, id_user)` directly in SQL, so a
//! cross-user update or delete simply affects zero rows -- there is no
//! separate ownership check to forget.

use relato_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::report::{
    AdminReport, CreateReport, Report, ReportFilter, ReportWithRefs, ReportWithType, UpdateReport,
};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, title, type_id, description, image, location, status_id, id_user";

/// Joined projection shared by the owner listing and the admin listing.
const JOINED_COLUMNS: &str = "r.id, r.title, r.type_id, t.name AS type_name, \
    r.description, r.image, r.location, r.status_id, s.name AS status_name, r.id_user";

/// Provides CRUD operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (title, type_id, description, image, location, status_id, id_user)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.title)
            .bind(input.type_id)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.location)
            .bind(input.status_id)
            .bind(input.id_user)
            .fetch_one(pool)
            .await
    }

    /// Fetch one report joined with its type, regardless of owner.
    pub async fn find_by_id_with_type(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ReportWithType>, sqlx::Error> {
        sqlx::query_as::<_, ReportWithType>(
            "SELECT r.id, r.title, r.type_id, t.name AS type_name, r.description,
                    r.image, r.location, r.status_id, r.id_user
             FROM reports r
             JOIN types t ON t.id = r.type_id
             WHERE r.id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all reports owned by `user_id`, joined with type and status.
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<ReportWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM reports r
             JOIN types t ON t.id = r.type_id
             JOIN statuses s ON s.id = r.status_id
             WHERE r.id_user = ?
             ORDER BY r.id"
        );
        sqlx::query_as::<_, ReportWithRefs>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List reports matching the given equality filters, joined with the
    /// owning user, type, and status.
    ///
    /// Each absent filter is skipped via the `(? IS NULL OR col = ?)` idiom,
    /// with the value bound twice.
    pub async fn list_filtered(
        pool: &SqlitePool,
        filter: &ReportFilter,
    ) -> Result<Vec<AdminReport>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, u.name AS user_name, u.email AS user_email
             FROM reports r
             JOIN types t ON t.id = r.type_id
             JOIN statuses s ON s.id = r.status_id
             JOIN users u ON u.id = r.id_user
             WHERE (? IS NULL OR r.status_id = ?)
               AND (? IS NULL OR r.type_id = ?)
               AND (? IS NULL OR r.id_user = ?)
             ORDER BY r.id"
        );
        sqlx::query_as::<_, AdminReport>(&query)
            .bind(filter.status_id)
            .bind(filter.status_id)
            .bind(filter.type_id)
            .bind(filter.type_id)
            .bind(filter.id_user)
            .bind(filter.id_user)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a report owned by `user_id`. Returns `false` when no row
    /// matches `(id, id_user)` -- absent or owned by someone else.
    pub async fn update_owned(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
        input: &UpdateReport,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE reports
             SET title = ?, type_id = ?, description = ?, image = ?, location = ?, status_id = ?
             WHERE id = ? AND id_user = ?",
        )
        .bind(&input.title)
        .bind(input.type_id)
        .bind(&input.description)
        .bind(&input.image)
        .bind(&input.location)
        .bind(input.status_id)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a report owned by `user_id`. Returns `false` when no row
    /// matches `(id, id_user)`.
    pub async fn delete_owned(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ? AND id_user = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set a report's status without any ownership scoping (admin triage).
    /// Returns `false` when the report does not exist.
    pub async fn set_status(
        pool: &SqlitePool,
        id: DbId,
        status_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE reports SET status_id = ? WHERE id = ?")
            .bind(status_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
