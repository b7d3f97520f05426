//! Repository for the `states` table.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::state::{CreateState, State, UpdateState};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, code, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "states";

/// Provides CRUD operations for states.
pub struct StateRepo;

impl StateRepo {
    /// Insert a new state, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateState) -> Result<State, sqlx::Error> {
        let query = format!(
            "INSERT INTO states (name, code) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, State>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_one(pool)
            .await
    }

    /// Find a state by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<State>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM states WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, State>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List states matching the given deletion-status filter, by name.
    pub async fn list(pool: &PgPool, filter: DeleteFilter) -> Result<Vec<State>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM states WHERE {} ORDER BY name ASC",
            filter.predicate()
        );
        sqlx::query_as::<_, State>(&query).fetch_all(pool).await
    }

    /// Update a state. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateState,
    ) -> Result<Option<State>, sqlx::Error> {
        let query = format!(
            "UPDATE states SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, State>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a state. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, None, deleter).await
    }

    /// Restore a soft-deleted state. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, None).await
    }

    /// Soft-delete a batch of states, one at a time (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, None, deleter).await
    }

    /// Permanently delete a batch of already soft-deleted states.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, None).await
    }
}
