//! Repository for the `statuses` lookup table.

use relato_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::status::Status;

/// Provides CRUD operations for statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// List all statuses ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Status>, sqlx::Error> {
        sqlx::query_as::<_, Status>("SELECT id, name FROM statuses ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find the first status whose name contains `fragment`,
    /// case-insensitively. Used to resolve the initial "Enviado" status.
    pub async fn find_by_name_contains(
        pool: &SqlitePool,
        fragment: &str,
    ) -> Result<Option<Status>, sqlx::Error> {
        sqlx::query_as::<_, Status>(
            "SELECT id, name FROM statuses WHERE name LIKE '%' || ? || '%' ORDER BY id LIMIT 1",
        )
        .bind(fragment)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new status, returning the created row.
    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Status, sqlx::Error> {
        sqlx::query_as::<_, Status>(
            "INSERT INTO statuses (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Rename a status. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Status>, sqlx::Error> {
        sqlx::query_as::<_, Status>(
            "UPDATE statuses SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a status. Returns `true` if a row was deleted. Fails at the
    /// storage layer if any report still references it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
