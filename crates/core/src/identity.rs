//! Resolved caller identity.

use serde::Serialize;

use crate::roles::Role;
use crate::types::DbId;

/// The result of resolving an actor id + role header pair.
///
/// For main-account roles `main_account_id == actor_id`; for staff roles it is
/// the parent account's id. Ownership checks and owner-scoped queries must
/// always use `main_account_id`, never `actor_id`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Identity {
    pub actor_id: DbId,
    pub role: Role,
    pub main_account_id: DbId,
}

impl Identity {
    /// Identity for a main-account actor (owns its own data).
    pub fn main(actor_id: DbId, role: Role) -> Self {
        Identity {
            actor_id,
            role,
            main_account_id: actor_id,
        }
    }

    /// Identity for a staff actor resolving to its parent account.
    pub fn staff(actor_id: DbId, role: Role, parent_id: DbId) -> Self {
        Identity {
            actor_id,
            role,
            main_account_id: parent_id,
        }
    }
}
