//! Repository for the `types` lookup table.

use relato_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::report_type::ReportType;

/// Provides CRUD operations for report types.
pub struct TypeRepo;

impl TypeRepo {
    /// List all types ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ReportType>, sqlx::Error> {
        sqlx::query_as::<_, ReportType>("SELECT id, name FROM types ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Insert a new type, returning the created row.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<ReportType, sqlx::Error> {
        sqlx::query_as::<_, ReportType>(
            "INSERT INTO types (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Rename a type. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        name: &str,
    ) -> Result<Option<ReportType>, sqlx::Error> {
        sqlx::query_as::<_, ReportType>(
            "UPDATE types SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a type. Returns `true` if a row was deleted. Fails at the
    /// storage layer if any report still references it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM types WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
