//! Repository for the `orders` table. Dropshipper-scoped.

use sqlx::PgPool;
use uuid::Uuid;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::order::{CreateOrder, Order};
use crate::repositories::soft_delete::{
    self, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, dropshipper_id, order_number, shopify_order_id, status, \
                       customer_name, total_cents, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "orders";
const OWNER: &str = "dropshipper_id";

/// Provides dropshipper-scoped operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Record a new order under the given dropshipper.
    ///
    /// An `order_number` is generated when the input does not carry one
    /// (webhook payloads usually do).
    pub async fn create(
        pool: &PgPool,
        dropshipper_id: DbId,
        input: &CreateOrder,
    ) -> Result<Order, sqlx::Error> {
        let order_number = input
            .order_number
            .clone()
            .unwrap_or_else(|| format!("BO-{}", Uuid::new_v4().simple()));
        let query = format!(
            "INSERT INTO orders \
                (dropshipper_id, order_number, shopify_order_id, status, customer_name, total_cents)
             VALUES ($1, $2, $3, COALESCE($4, 'pending'), $5, COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(dropshipper_id)
            .bind(order_number)
            .bind(input.shopify_order_id)
            .bind(&input.status)
            .bind(&input.customer_name)
            .bind(input.total_cents)
            .fetch_one(pool)
            .await
    }

    /// Find an order by ID within the dropshipper's scope. Excludes
    /// soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        dropshipper_id: DbId,
        id: DbId,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders \
             WHERE id = $1 AND dropshipper_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(dropshipper_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an order by its Shopify order id within the dropshipper's scope,
    /// including soft-deleted rows. Used by the webhook to deduplicate.
    pub async fn find_by_shopify_order_id(
        pool: &PgPool,
        dropshipper_id: DbId,
        shopify_order_id: i64,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders \
             WHERE dropshipper_id = $1 AND shopify_order_id = $2"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(dropshipper_id)
            .bind(shopify_order_id)
            .fetch_optional(pool)
            .await
    }

    /// List the dropshipper's orders matching the deletion-status filter.
    pub async fn list(
        pool: &PgPool,
        dropshipper_id: DbId,
        filter: DeleteFilter,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders WHERE dropshipper_id = $1 AND {} \
             ORDER BY created_at DESC",
            filter.predicate()
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(dropshipper_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete an order within the dropshipper's scope.
    pub async fn soft_delete(
        pool: &PgPool,
        dropshipper_id: DbId,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, Some((OWNER, dropshipper_id)), deleter).await
    }

    /// Restore a soft-deleted order within the dropshipper's scope.
    pub async fn restore(
        pool: &PgPool,
        dropshipper_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, Some((OWNER, dropshipper_id))).await
    }

    /// Soft-delete a batch of the dropshipper's orders (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        dropshipper_id: DbId,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, Some((OWNER, dropshipper_id)), deleter).await
    }
}
