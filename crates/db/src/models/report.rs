//! Report entity model, joined projections, and DTOs.

use relato_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Bare report row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub title: String,
    pub type_id: DbId,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
    pub id_user: DbId,
}

/// Report joined with its type name (public single-report view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportWithType {
    pub id: DbId,
    pub title: String,
    pub type_id: DbId,
    pub type_name: String,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
    pub id_user: DbId,
}

/// Report joined with type and status names (owner listing).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportWithRefs {
    pub id: DbId,
    pub title: String,
    pub type_id: DbId,
    pub type_name: String,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
    pub status_name: String,
    pub id_user: DbId,
}

/// Report joined with owner, type, and status (admin listing).
///
/// Exposes the owner's name and email, never the password column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminReport {
    pub id: DbId,
    pub title: String,
    pub type_id: DbId,
    pub type_name: String,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
    pub status_name: String,
    pub id_user: DbId,
    pub user_name: String,
    pub user_email: String,
}

/// DTO for creating a report. `status_id` is resolved by the caller from
/// the initial-status lookup; `id_user` comes from the auth claim.
#[derive(Debug)]
pub struct CreateReport {
    pub title: String,
    pub type_id: DbId,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
    pub id_user: DbId,
}

/// DTO for the owner's full-row update. Every field is overwritten,
/// including the status reset back to the initial one.
#[derive(Debug)]
pub struct UpdateReport {
    pub title: String,
    pub type_id: DbId,
    pub description: String,
    pub image: Option<String>,
    pub location: String,
    pub status_id: DbId,
}

/// Optional equality filters for the admin cross-user listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportFilter {
    pub status_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub id_user: Option<DbId>,
}
