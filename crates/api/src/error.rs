use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relato_core::error::CoreError;
use serde_json::json;

/// Generic message for anything the client must not learn details about.
const INTERNAL_MESSAGE: &str = "Erro interno do servidor.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds storage/internal variants.
/// Implements [`IntoResponse`] so every failure produces the same
/// `{ "message": ... }` JSON body the clients expect.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `relato_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable cause (logged, not exposed).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and client message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations map to 400; `users.email` is the only unique
///   constraint in the schema, so the message can name it.
/// - Everything else (including FK violations on type/status references)
///   maps to 500 with a sanitized message, cause logged server-side.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Não encontrado.".to_string()),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return (StatusCode::BAD_REQUEST, "Email já cadastrado.".to_string());
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
