//! Repository for the `warehouses` table. Supplier-scoped like products.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::warehouse::{CreateWarehouse, UpdateWarehouse, Warehouse};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, supplier_id, name, address, city_id, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "warehouses";
const OWNER: &str = "supplier_id";

/// Provides supplier-scoped CRUD operations for warehouses.
pub struct WarehouseRepo;

impl WarehouseRepo {
    /// Insert a new warehouse under the given supplier.
    pub async fn create(
        pool: &PgPool,
        supplier_id: DbId,
        input: &CreateWarehouse,
    ) -> Result<Warehouse, sqlx::Error> {
        let query = format!(
            "INSERT INTO warehouses (supplier_id, name, address, city_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(supplier_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.city_id)
            .fetch_one(pool)
            .await
    }

    /// Find a warehouse by ID within the supplier's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
    ) -> Result<Option<Warehouse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM warehouses \
             WHERE id = $1 AND supplier_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .bind(supplier_id)
            .fetch_optional(pool)
            .await
    }

    /// List the supplier's warehouses matching the deletion-status filter.
    pub async fn list(
        pool: &PgPool,
        supplier_id: DbId,
        filter: DeleteFilter,
    ) -> Result<Vec<Warehouse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM warehouses WHERE supplier_id = $1 AND {} \
             ORDER BY created_at DESC",
            filter.predicate()
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(supplier_id)
            .fetch_all(pool)
            .await
    }

    /// Update a warehouse within the supplier's scope.
    pub async fn update(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
        input: &UpdateWarehouse,
    ) -> Result<Option<Warehouse>, sqlx::Error> {
        let query = format!(
            "UPDATE warehouses SET
                name = COALESCE($3, name),
                address = COALESCE($4, address),
                city_id = COALESCE($5, city_id),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1 AND supplier_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Warehouse>(&query)
            .bind(id)
            .bind(supplier_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.city_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a warehouse within the supplier's scope.
    pub async fn soft_delete(
        pool: &PgPool,
        supplier_id: DbId,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, Some((OWNER, supplier_id)), deleter).await
    }

    /// Restore a soft-deleted warehouse within the supplier's scope.
    pub async fn restore(pool: &PgPool, supplier_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, Some((OWNER, supplier_id))).await
    }

    /// Soft-delete a batch of the supplier's warehouses (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        supplier_id: DbId,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, Some((OWNER, supplier_id)), deleter).await
    }

    /// Permanently delete a batch of the supplier's soft-deleted warehouses.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        supplier_id: DbId,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, Some((OWNER, supplier_id))).await
    }
}
