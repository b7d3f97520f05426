//! Warehouse model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full warehouse row from the `warehouses` table. Supplier-owned.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Warehouse {
    pub id: DbId,
    pub supplier_id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub city_id: Option<DbId>,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new warehouse. The owning supplier id comes from the
/// resolved identity.
#[derive(Debug, Deserialize)]
pub struct CreateWarehouse {
    pub name: String,
    pub address: Option<String>,
    pub city_id: Option<DbId>,
}

/// DTO for updating an existing warehouse. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateWarehouse {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city_id: Option<DbId>,
    pub is_active: Option<bool>,
}
