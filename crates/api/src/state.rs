use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc` or is a pool
/// handle. The configuration (including the JWT signing secret) is
/// immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: relato_db::DbPool,
    /// Server configuration, loaded once from the environment.
    pub config: Arc<ServerConfig>,
}
