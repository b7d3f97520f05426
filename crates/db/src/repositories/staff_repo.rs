//! Repository for the `staff` table.

use sqlx::PgPool;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};
use crate::repositories::soft_delete::{self, Deleter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, parent_id, role, name, email, is_active, \
                       deleted_at, deleted_by, deleted_by_role, created_at, updated_at";

const TABLE: &str = "staff";

/// Provides CRUD operations for staff sub-accounts.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (parent_id, role, name, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(input.parent_id)
            .bind(&input.role)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List staff members matching the filter, optionally restricted to one
    /// staff role.
    pub async fn list(
        pool: &PgPool,
        role: Option<&str>,
        filter: DeleteFilter,
    ) -> Result<Vec<Staff>, sqlx::Error> {
        match role {
            Some(role) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM staff WHERE role = $1 AND {} \
                     ORDER BY created_at DESC",
                    filter.predicate()
                );
                sqlx::query_as::<_, Staff>(&query)
                    .bind(role)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM staff WHERE {} ORDER BY created_at DESC",
                    filter.predicate()
                );
                sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a staff member. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a staff member. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        deleter: &Deleter,
    ) -> Result<bool, sqlx::Error> {
        soft_delete::soft_delete_in(pool, TABLE, id, None, deleter).await
    }

    /// Restore a soft-deleted staff member. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        soft_delete::restore_in(pool, TABLE, id, None).await
    }
}
