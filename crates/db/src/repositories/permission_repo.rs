//! Repository for the `staff_permissions` table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::permission::{PermissionEntry, StaffPermission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, staff_id, panel, module, action, status, created_at, updated_at";

/// Provides permission lookups and the replace-set update used by the admin
/// staff-management screens.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Whether the staff member holds an exact `(panel, module, action)`
    /// record with `status = true`. Absence of a record denies.
    pub async fn is_allowed(
        pool: &PgPool,
        staff_id: DbId,
        panel: &str,
        module: &str,
        action: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT status FROM staff_permissions \
             WHERE staff_id = $1 AND panel = $2 AND module = $3 AND action = $4",
        )
        .bind(staff_id)
        .bind(panel)
        .bind(module)
        .bind(action)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(status,)| status).unwrap_or(false))
    }

    /// List every permission record for a staff member.
    pub async fn list_for_staff(
        pool: &PgPool,
        staff_id: DbId,
    ) -> Result<Vec<StaffPermission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_permissions \
             WHERE staff_id = $1 ORDER BY panel, module, action"
        );
        sqlx::query_as::<_, StaffPermission>(&query)
            .bind(staff_id)
            .fetch_all(pool)
            .await
    }

    /// Upsert a single permission triple for a staff member.
    pub async fn upsert(
        pool: &PgPool,
        staff_id: DbId,
        entry: &PermissionEntry,
    ) -> Result<StaffPermission, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_permissions (staff_id, panel, module, action, status)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT ON CONSTRAINT uq_staff_permissions_triple
             DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffPermission>(&query)
            .bind(staff_id)
            .bind(&entry.panel)
            .bind(&entry.module)
            .bind(&entry.action)
            .bind(entry.status)
            .fetch_one(pool)
            .await
    }

    /// Replace a staff member's full permission set: delete existing records,
    /// then insert the new entries one at a time.
    pub async fn replace_for_staff(
        pool: &PgPool,
        staff_id: DbId,
        entries: &[PermissionEntry],
    ) -> Result<Vec<StaffPermission>, sqlx::Error> {
        sqlx::query("DELETE FROM staff_permissions WHERE staff_id = $1")
            .bind(staff_id)
            .execute(pool)
            .await?;
        for entry in entries {
            Self::upsert(pool, staff_id, entry).await?;
        }
        Self::list_for_staff(pool, staff_id).await
    }
}
