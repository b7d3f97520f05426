//! State (region) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full state row from the `states` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct State {
    pub id: DbId,
    pub name: String,
    pub code: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new state.
#[derive(Debug, Deserialize)]
pub struct CreateState {
    pub name: String,
    pub code: Option<String>,
}

/// DTO for updating an existing state. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateState {
    pub name: Option<String>,
    pub code: Option<String>,
    pub is_active: Option<bool>,
}
