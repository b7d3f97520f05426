//! Admin account model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full admin row from the `admins` table. Admin accounts are never
/// soft-deleted; they are deactivated via `is_active`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin.
#[derive(Debug, Deserialize)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
}
