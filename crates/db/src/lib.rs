//! Persistence gateway for the Relato backend.
//!
//! Exposes the connection-pool helpers plus `models` (row structs and DTOs)
//! and `repositories` (one stateless repo per table). All SQL lives here;
//! the API crate only ever sees typed rows and `sqlx::Error`.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

/// Shared pool alias so callers never name the concrete driver.
pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// Creates the database file on first run and enforces foreign keys, which
/// the report ownership cascade relies on.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Cheap connectivity probe used by the health endpoint and at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
