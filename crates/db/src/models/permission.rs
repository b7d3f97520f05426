//! Staff permission record model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full row from the `staff_permissions` table: one boolean flag per
/// `(panel, module, action)` triple, scoped to a staff member.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StaffPermission {
    pub id: DbId,
    pub staff_id: DbId,
    pub panel: String,
    pub module: String,
    pub action: String,
    pub status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One permission entry in a replace-set update.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionEntry {
    pub panel: String,
    pub module: String,
    pub action: String,
    pub status: bool,
}

/// DTO for replacing a staff member's full permission set.
#[derive(Debug, Deserialize)]
pub struct ReplacePermissions {
    pub permissions: Vec<PermissionEntry>,
}
