//! The permission gate.
//!
//! Main-account actors bypass the check entirely; staff actors need an exact
//! `(panel, module, action)` record with `status = true`. Every call
//! re-queries the permission table, there is no cache to invalidate when an
//! admin edits a staff member's permissions.

use sqlx::PgPool;

use backoffice_core::error::CoreError;
use backoffice_core::identity::Identity;
use backoffice_core::permissions::Action;
use backoffice_db::repositories::{Deleter, PermissionRepo};

use crate::error::AppError;

/// Allow or deny `action` on `module` for the resolved caller.
///
/// Returns `Ok(())` when allowed; `Err` with a 403 otherwise.
pub async fn authorize(
    pool: &PgPool,
    identity: &Identity,
    module: &str,
    action: Action,
) -> Result<(), AppError> {
    if !identity.role.is_staff() {
        return Ok(());
    }

    let panel = identity.role.panel();
    let allowed = PermissionRepo::is_allowed(
        pool,
        identity.actor_id,
        panel.as_str(),
        module,
        action.as_str(),
    )
    .await?;

    if allowed {
        Ok(())
    } else {
        tracing::debug!(
            staff_id = identity.actor_id,
            %panel,
            module,
            %action,
            "Permission denied",
        );
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Permission denied: {action} on {module}"
        ))))
    }
}

/// Deletion attribution for the resolved caller: the acting staff member (or
/// main account) is recorded, not the owning main account.
pub fn deleter_of(identity: &Identity) -> Deleter {
    Deleter {
        id: identity.actor_id,
        role: identity.role,
    }
}
