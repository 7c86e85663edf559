//! Status lookup-table model.

use relato_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `statuses` table (admin-managed triage lifecycle).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Status {
    pub id: DbId,
    pub name: String,
}
