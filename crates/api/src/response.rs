//! Shared response envelope types for API handlers.
//!
//! Success bodies vary per endpoint (record, array, or message); the
//! message-only shape is common enough to deserve a typed envelope instead
//! of ad-hoc `serde_json::json!` literals.

use serde::Serialize;

/// Standard `{ "message": ... }` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
