//! Environment-sourced server configuration.

use crate::auth::jwt::JwtConfig;

/// Default bind address.
const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port.
const DEFAULT_PORT: u16 = 3000;
/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default allowed CORS origin for local development.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Immutable server configuration, loaded once at startup and shared
/// through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g. `0.0.0.0`).
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// JWT signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                 |
    /// |------------------------|----------|-------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`               |
    /// | `PORT`                 | no       | `3000`                  |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                    |
    /// | `JWT_SECRET`           | **yes**  | --                      |
    /// | `JWT_EXPIRY_MINS`      | no       | `1440`                  |
    ///
    /// # Panics
    ///
    /// Panics on a malformed `PORT`/`REQUEST_TIMEOUT_SECS` or a missing
    /// `JWT_SECRET` -- misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
