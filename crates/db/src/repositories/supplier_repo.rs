//! Repository for the `suppliers` table.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::supplier::{CreateSupplier, Supplier, UpdateSupplier};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, company_name, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "suppliers";

/// Provides CRUD operations for suppliers.
pub struct SupplierRepo;

impl SupplierRepo {
    /// Insert a new supplier, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSupplier) -> Result<Supplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO suppliers (name, email, phone, company_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company_name)
            .fetch_one(pool)
            .await
    }

    /// Find a supplier by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List suppliers matching the given deletion-status filter, most recent
    /// first.
    pub async fn list(pool: &PgPool, filter: DeleteFilter) -> Result<Vec<Supplier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suppliers WHERE {} ORDER BY created_at DESC",
            filter.predicate()
        );
        sqlx::query_as::<_, Supplier>(&query).fetch_all(pool).await
    }

    /// Update a supplier. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupplier,
    ) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!(
            "UPDATE suppliers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company_name = COALESCE($5, company_name),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company_name)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a supplier, stamping the deleting actor. Returns `true`
    /// if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, None, deleter).await
    }

    /// Restore a soft-deleted supplier. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, None).await
    }

    /// Soft-delete a batch of suppliers, one at a time (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, None, deleter).await
    }

    /// Permanently delete a batch of already soft-deleted suppliers.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, None).await
    }
}
