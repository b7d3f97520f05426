//! Supplier account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full supplier row from the `suppliers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplier {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new supplier.
#[derive(Debug, Deserialize)]
pub struct CreateSupplier {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
}

/// DTO for updating an existing supplier. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSupplier {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_active: Option<bool>,
}
