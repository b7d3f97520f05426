//! Repository for the `cities` table.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;
use crate::models::city::{City, CreateCity, UpdateCity};
use crate::repositories::soft_delete::{
    self, bulk_hard_delete_in, bulk_soft_delete_in, Deleter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, state_id, name, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "cities";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (state_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(input.state_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cities matching the filter, optionally restricted to one state.
    pub async fn list(
        pool: &PgPool,
        state_id: Option<DbId>,
        filter: DeleteFilter,
    ) -> Result<Vec<City>, sqlx::Error> {
        match state_id {
            Some(state_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM cities WHERE state_id = $1 AND {} \
                     ORDER BY name ASC",
                    filter.predicate()
                );
                sqlx::query_as::<_, City>(&query)
                    .bind(state_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM cities WHERE {} ORDER BY name ASC",
                    filter.predicate()
                );
                sqlx::query_as::<_, City>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET
                state_id = COALESCE($2, state_id),
                name = COALESCE($3, name),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(input.state_id)
            .bind(&input.name)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a city. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, None, deleter).await
    }

    /// Restore a soft-deleted city. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, None).await
    }

    /// Soft-delete a batch of cities, one at a time (partial success).
    pub async fn bulk_soft_delete(
        pool: &PgPool,
        ids: &[DbId],
        deleter: &Deleter,
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_soft_delete_in(pool, TABLE, ids, None, deleter).await
    }

    /// Permanently delete a batch of already soft-deleted cities.
    pub async fn bulk_hard_delete(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<BulkDeleteOutcome, sqlx::Error> {
        bulk_hard_delete_in(pool, TABLE, ids, None).await
    }
}
