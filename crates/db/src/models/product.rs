//! Product model and DTOs.
//!
//! Products are supplier-owned; every query is scoped by `supplier_id`, which
//! is always the resolved main-account id of the caller.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full product row from the `products` table. Prices are integer cents.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub supplier_id: DbId,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock_qty: i32,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product. The owning supplier id comes from the
/// resolved identity, not the request body.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock_qty: Option<i32>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock_qty: Option<i32>,
    pub is_active: Option<bool>,
}
