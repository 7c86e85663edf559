/// Domain error taxonomy shared by every service.
///
/// Each variant maps 1:1 to an HTTP status at the API boundary
/// (400 / 401 / 403 / 404 / 500). Messages are user-facing, already
/// localized in Brazilian Portuguese; the underlying cause of `Internal`
/// errors is logged server-side and never returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
