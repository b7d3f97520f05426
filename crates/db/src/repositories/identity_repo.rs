//! Identity resolution: actor id + role header pair → main account.

use sqlx::PgPool;

use backoffice_core::identity::Identity;
use backoffice_core::roles::Role;
use backoffice_core::types::DbId;

/// Resolves `(actor_id, role)` pairs to the owning main account.
pub struct IdentityRepo;

impl IdentityRepo {
    /// Resolve an actor to its identity.
    ///
    /// Main roles are an existence check against their own table; staff roles
    /// look up the staff row and substitute its `parent_id` as the
    /// main-account id. Returns `None` when no live row matches.
    pub async fn resolve(
        pool: &PgPool,
        actor_id: DbId,
        role: Role,
    ) -> Result<Option<Identity>, sqlx::Error> {
        if role.is_staff() {
            let row: Option<(DbId,)> = sqlx::query_as(
                "SELECT parent_id FROM staff WHERE id = $1 AND role = $2 AND deleted_at IS NULL",
            )
            .bind(actor_id)
            .bind(role.as_str())
            .fetch_optional(pool)
            .await?;
            return Ok(row.map(|(parent_id,)| Identity::staff(actor_id, role, parent_id)));
        }

        // Admins are never soft-deleted; suppliers and dropshippers are.
        let sql = match role {
            Role::Admin => "SELECT EXISTS(SELECT 1 FROM admins WHERE id = $1)",
            Role::Supplier => {
                "SELECT EXISTS(SELECT 1 FROM suppliers WHERE id = $1 AND deleted_at IS NULL)"
            }
            _ => "SELECT EXISTS(SELECT 1 FROM dropshippers WHERE id = $1 AND deleted_at IS NULL)",
        };
        let (exists,): (bool,) = sqlx::query_as(sql).bind(actor_id).fetch_one(pool).await?;
        Ok(exists.then(|| Identity::main(actor_id, role)))
    }
}
