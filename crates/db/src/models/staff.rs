//! Staff sub-account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full staff row from the `staff` table.
///
/// `parent_id` references the owning main account in the table matching
/// `role` (admins / suppliers / dropshippers).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub parent_id: DbId,
    pub role: String,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new staff member under a main account.
#[derive(Debug, Deserialize)]
pub struct CreateStaff {
    pub parent_id: DbId,
    pub role: String,
    pub name: String,
    pub email: String,
}

/// DTO for updating an existing staff member. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}
