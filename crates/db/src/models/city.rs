//! City model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full city row from the `cities` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct City {
    pub id: DbId,
    pub state_id: DbId,
    pub name: String,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new city under a state.
#[derive(Debug, Deserialize)]
pub struct CreateCity {
    pub state_id: DbId,
    pub name: String,
}

/// DTO for updating an existing city. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCity {
    pub state_id: Option<DbId>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
