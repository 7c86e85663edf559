//! Shared domain types for the Relato backend.
//!
//! Kept deliberately small: the error taxonomy, scalar aliases, and the
//! well-known status constants every other crate needs.

pub mod error;
pub mod status;
pub mod types;
