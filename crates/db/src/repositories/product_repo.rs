//! Repository for the `products` table.
//!
//! Every operation is scoped by `supplier_id`, which is always the caller's
//! resolved main-account id, never a staff actor's own id.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, supplier_id, name, sku, description, price_cents, stock_qty, \
                       is_active, deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "products";
const OWNER: &str = "supplier_id";

/// Provides supplier-scoped CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product under the given supplier, returning the created row.
    pub async fn create(
        pool: &PgPool,
        supplier_id: DbId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (supplier_id, name, sku, description, price_cents, stock_qty)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(supplier_id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.description)
            .bind(input.price_cents)
            .bind(input.stock_qty)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID within the supplier's inventory. Excludes
    /// soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE id = $1 AND supplier_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(supplier_id)
            .fetch_optional(pool)
            .await
    }

    /// List the supplier's products matching the deletion-status filter.
    pub async fn list(
        pool: &PgPool,
        supplier_id: DbId,
        filter: DeleteFilter,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE supplier_id = $1 AND {} \
             ORDER BY created_at DESC",
            filter.predicate()
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(supplier_id)
            .fetch_all(pool)
            .await
    }

    /// Update a product within the supplier's inventory. Only non-`None`
    /// fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                price_cents = COALESCE($5, price_cents),
                stock_qty = COALESCE($6, stock_qty),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE id = $1 AND supplier_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(supplier_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price_cents)
            .bind(input.stock_qty)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a product within the supplier's inventory.
    pub async fn soft_delete(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, Some((OWNER, supplier_id)), deleter).await
    }

    /// Restore a soft-deleted product within the supplier's inventory.
    pub async fn restore(pool: &PgPool, supplier_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, Some((OWNER, supplier_id))).await
    }

    /// Soft-delete a batch of the supplier's products (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        supplier_id: DbId,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, Some((OWNER, supplier_id)), deleter).await
    }

    /// Permanently delete a batch of the supplier's soft-deleted products.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        supplier_id: DbId,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, Some((OWNER, supplier_id))).await
    }
}
