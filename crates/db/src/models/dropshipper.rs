//! Dropshipper account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full dropshipper row from the `dropshippers` table.
///
/// `shopify_domain` links the account to its Shopify store; the order webhook
/// resolves the owning dropshipper through it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Dropshipper {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub shopify_domain: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new dropshipper.
#[derive(Debug, Deserialize)]
pub struct CreateDropshipper {
    pub name: String,
    pub email: String,
    pub shopify_domain: Option<String>,
}

/// DTO for updating an existing dropshipper. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateDropshipper {
    pub name: Option<String>,
    pub email: Option<String>,
    pub shopify_domain: Option<String>,
    pub is_active: Option<bool>,
}
