//! Order model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use backoffice_core::types::{DbId, Timestamp};

/// Full order row from the `orders` table. Dropshipper-owned.
///
/// `shopify_order_id` is set for orders ingested through the Shopify webhook
/// and is unique per dropshipper.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: DbId,
    pub dropshipper_id: DbId,
    pub order_number: String,
    pub shopify_order_id: Option<i64>,
    pub status: String,
    pub customer_name: Option<String>,
    pub total_cents: i64,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<DbId>,
    pub deleted_by_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a new order. The owning dropshipper id comes from the
/// resolved identity (or the webhook's shop-domain lookup).
#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub order_number: Option<String>,
    pub shopify_order_id: Option<i64>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub total_cents: Option<i64>,
}
