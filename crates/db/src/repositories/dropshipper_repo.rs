//! Repository for the `dropshippers` table.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::dropshipper::{CreateDropshipper, Dropshipper, UpdateDropshipper};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, shopify_domain, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "dropshippers";

/// Provides CRUD operations for dropshippers.
pub struct DropshipperRepo;

impl DropshipperRepo {
    /// Insert a new dropshipper, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDropshipper,
    ) -> Result<Dropshipper, sqlx::Error> {
        let query = format!(
            "INSERT INTO dropshippers (name, email, shopify_domain)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dropshipper>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.shopify_domain)
            .fetch_one(pool)
            .await
    }

    /// Find a dropshipper by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dropshipper>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM dropshippers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Dropshipper>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a dropshipper by its linked Shopify shop domain. Used by the
    /// order webhook. Excludes soft-deleted and deactivated accounts.
    pub async fn find_by_shopify_domain(
        pool: &PgPool,
        domain: &str,
    ) -> Result<Option<Dropshipper>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dropshippers \
             WHERE shopify_domain = $1 AND deleted_at IS NULL AND is_active = TRUE"
        );
        sqlx::query_as::<_, Dropshipper>(&query)
            .bind(domain)
            .fetch_optional(pool)
            .await
    }

    /// List dropshippers matching the given deletion-status filter.
    pub async fn list(
        pool: &PgPool,
        filter: DeleteFilter,
    ) -> Result<Vec<Dropshipper>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dropshippers WHERE {} ORDER BY created_at DESC",
            filter.predicate()
        );
        sqlx::query_as::<_, Dropshipper>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a dropshipper. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDropshipper,
    ) -> Result<Option<Dropshipper>, sqlx::Error> {
        let query = format!(
            "UPDATE dropshippers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                shopify_domain = COALESCE($4, shopify_domain),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dropshipper>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.shopify_domain)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a dropshipper. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, None, deleter).await
    }

    /// Restore a soft-deleted dropshipper. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, None).await
    }

    /// Soft-delete a batch of dropshippers, one at a time (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, None, deleter).await
    }

    /// Permanently delete a batch of already soft-deleted dropshippers.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, None).await
    }
}
