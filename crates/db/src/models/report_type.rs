//! Report type lookup-table model.

use relato_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `types` table (admin-managed report taxonomy).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportType {
    pub id: DbId,
    pub name: String,
}
