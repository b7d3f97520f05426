//! Shared soft-delete plumbing used by every entity repository.
//!
//! All soft-deletable tables carry the same three columns (`deleted_at`,
//! `deleted_by`, `deleted_by_role`), so the UPDATE/DELETE statements are
//! built dynamically from a table-name allowlist rather than repeated per
//! repository. Owner-scoped tables additionally constrain every statement by
//! their owner column.

use sqlx::PgPool;

use backoffice_core::roles::Role;
use backoffice_core::types::DbId;

use crate::models::bulk::BulkDeleteOutcome;

/// Tables that carry the soft-delete columns. Dynamic SQL must only ever
/// interpolate names from this list.
const SOFT_DELETE_TABLES: &[&str] = &[
    "suppliers",
    "dropshippers",
    "staff",
    "states",
    "cities",
    "products",
    "warehouses",
    "orders",
];

/// Actor attribution stamped onto rows on soft delete.
#[derive(Debug, Clone, Copy)]
pub struct Deleter {
    pub id: DbId,
    pub role: Role,
}

/// Optional owner-column constraint, e.g. `("supplier_id", 3)`.
pub type OwnerScope = Option<(&'static str, DbId)>;

fn check_table(table: &str) {
    assert!(
        SOFT_DELETE_TABLES.contains(&table),
        "table {table} is not soft-deletable"
    );
}

fn owner_clause(owner: OwnerScope, next_bind: usize) -> String {
    match owner {
        Some((col, _)) => format!(" AND {col} = ${next_bind}"),
        None => String::new(),
    }
}

/// Mark a row deleted, stamping the deleting actor. Returns `false` when the
/// row does not exist (within scope) or is already deleted.
pub async fn soft_delete_in(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
    owner: OwnerScope,
    deleter: &Deleter,
) -> Result<bool, sqlx::Error> {
    check_table(table);
    let sql = format!(
        "UPDATE {table} SET deleted_at = NOW(), deleted_by = $2, deleted_by_role = $3 \
         WHERE id = $1 AND deleted_at IS NULL{}",
        owner_clause(owner, 4)
    );
    let mut query = sqlx::query(&sql)
        .bind(id)
        .bind(deleter.id)
        .bind(deleter.role.as_str());
    if let Some((_, owner_id)) = owner {
        query = query.bind(owner_id);
    }
    let result = query.execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Null out all three deletion fields. Returns `false` when the row does not
/// exist (within scope) or is not deleted, which makes restore idempotent on
/// the nulled fields.
pub async fn restore_in(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
    owner: OwnerScope,
) -> Result<bool, sqlx::Error> {
    check_table(table);
    let sql = format!(
        "UPDATE {table} SET deleted_at = NULL, deleted_by = NULL, deleted_by_role = NULL \
         WHERE id = $1 AND deleted_at IS NOT NULL{}",
        owner_clause(owner, 2)
    );
    let mut query = sqlx::query(&sql).bind(id);
    if let Some((_, owner_id)) = owner {
        query = query.bind(owner_id);
    }
    let result = query.execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Permanently remove an already soft-deleted row. Live rows are left alone.
pub async fn hard_delete_in(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
    owner: OwnerScope,
) -> Result<bool, sqlx::Error> {
    check_table(table);
    let sql = format!(
        "DELETE FROM {table} WHERE id = $1 AND deleted_at IS NOT NULL{}",
        owner_clause(owner, 2)
    );
    let mut query = sqlx::query(&sql).bind(id);
    if let Some((_, owner_id)) = owner {
        query = query.bind(owner_id);
    }
    let result = query.execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Whether the row exists (within scope) and, if so, whether it is deleted.
async fn deletion_state(
    pool: &PgPool,
    table: &'static str,
    id: DbId,
    owner: OwnerScope,
) -> Result<Option<bool>, sqlx::Error> {
    check_table(table);
    let sql = format!(
        "SELECT deleted_at IS NOT NULL FROM {table} WHERE id = $1{}",
        owner_clause(owner, 2)
    );
    let mut query = sqlx::query_as::<_, (bool,)>(&sql).bind(id);
    if let Some((_, owner_id)) = owner {
        query = query.bind(owner_id);
    }
    Ok(query.fetch_optional(pool).await?.map(|(deleted,)| deleted))
}

/// Soft-delete a batch of ids, one at a time.
///
/// No transaction spans the batch: each id is resolved and deleted
/// independently, and a missing or already-deleted id is reported in
/// `not_deleted` without affecting the rest.
pub async fn bulk_soft_delete_in(
    pool: &PgPool,
    table: &'static str,
    ids: &[DbId],
    owner: OwnerScope,
    deleter: &Deleter,
) -> Result<BulkDeleteOutcome, sqlx::Error> {
    let mut outcome = BulkDeleteOutcome::default();
    for &id in ids {
        match deletion_state(pool, table, id, owner).await? {
            None => outcome.record_skipped(id, "not found"),
            Some(true) => outcome.record_skipped(id, "already deleted"),
            Some(false) => match soft_delete_in(pool, table, id, owner, deleter).await {
                Ok(true) => outcome.record_deleted(id),
                Ok(false) => outcome.record_skipped(id, "already deleted"),
                // A statement-level rejection (constraint, trigger) only
                // skips this id; connection failures still abort.
                Err(sqlx::Error::Database(_)) => outcome.record_skipped(id, "rejected"),
                Err(err) => return Err(err),
            },
        }
    }
    Ok(outcome)
}

/// Permanently delete a batch of already soft-deleted ids, one at a time.
/// Rows that are still live, or still referenced by child rows, are reported
/// in `not_deleted`; neither outcome aborts the rest of the batch.
pub async fn bulk_hard_delete_in(
    pool: &PgPool,
    table: &'static str,
    ids: &[DbId],
    owner: OwnerScope,
) -> Result<BulkDeleteOutcome, sqlx::Error> {
    let mut outcome = BulkDeleteOutcome::default();
    for &id in ids {
        match deletion_state(pool, table, id, owner).await? {
            None => outcome.record_skipped(id, "not found"),
            Some(false) => outcome.record_skipped(id, "not deleted"),
            Some(true) => match hard_delete_in(pool, table, id, owner).await {
                Ok(true) => outcome.record_deleted(id),
                Ok(false) => outcome.record_skipped(id, "not found"),
                // Foreign keys block purging rows with surviving children
                // (products under a supplier, cities under a state).
                Err(sqlx::Error::Database(_)) => outcome.record_skipped(id, "still referenced"),
                Err(err) => return Err(err),
            },
        }
    }
    Ok(outcome)
}
