//! Actor roles.
//!
//! Three main-account roles (admin, supplier, dropshipper), each with a
//! matching staff sub-role. Role strings must match the values stored in the
//! `staff.role` column and sent in the `x-<portal>-role` headers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::permissions::Panel;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ADMIN_STAFF: &str = "admin_staff";
pub const ROLE_SUPPLIER: &str = "supplier";
pub const ROLE_SUPPLIER_STAFF: &str = "supplier_staff";
pub const ROLE_DROPSHIPPER: &str = "dropshipper";
pub const ROLE_DROPSHIPPER_STAFF: &str = "dropshipper_staff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    AdminStaff,
    Supplier,
    SupplierStaff,
    Dropshipper,
    DropshipperStaff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::AdminStaff => ROLE_ADMIN_STAFF,
            Role::Supplier => ROLE_SUPPLIER,
            Role::SupplierStaff => ROLE_SUPPLIER_STAFF,
            Role::Dropshipper => ROLE_DROPSHIPPER,
            Role::DropshipperStaff => ROLE_DROPSHIPPER_STAFF,
        }
    }

    /// Whether this is a staff sub-role (authorized via the parent account's
    /// permission table).
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Role::AdminStaff | Role::SupplierStaff | Role::DropshipperStaff
        )
    }

    /// The main-account role this role resolves to. Identity for main roles.
    pub fn main_role(&self) -> Role {
        match self {
            Role::Admin | Role::AdminStaff => Role::Admin,
            Role::Supplier | Role::SupplierStaff => Role::Supplier,
            Role::Dropshipper | Role::DropshipperStaff => Role::Dropshipper,
        }
    }

    /// The portal panel this role belongs to.
    pub fn panel(&self) -> Panel {
        match self.main_role() {
            Role::Admin => Panel::Admin,
            Role::Supplier => Panel::Supplier,
            _ => Panel::Dropshipper,
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_ADMIN_STAFF => Ok(Role::AdminStaff),
            ROLE_SUPPLIER => Ok(Role::Supplier),
            ROLE_SUPPLIER_STAFF => Ok(Role::SupplierStaff),
            ROLE_DROPSHIPPER => Ok(Role::Dropshipper),
            ROLE_DROPSHIPPER_STAFF => Ok(Role::DropshipperStaff),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the six known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_all_known_roles() {
        for s in [
            "admin",
            "admin_staff",
            "supplier",
            "supplier_staff",
            "dropshipper",
            "dropshipper_staff",
        ] {
            let role: Role = s.parse().unwrap();
            assert_eq!(role.as_str(), s);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_matches!("superuser".parse::<Role>(), Err(UnknownRole(s)) if s == "superuser");
        assert!("".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err(), "role strings are case-sensitive");
    }

    #[test]
    fn staff_roles_resolve_to_main_role() {
        assert_eq!(Role::AdminStaff.main_role(), Role::Admin);
        assert_eq!(Role::SupplierStaff.main_role(), Role::Supplier);
        assert_eq!(Role::DropshipperStaff.main_role(), Role::Dropshipper);
        assert_eq!(Role::Supplier.main_role(), Role::Supplier);
    }

    #[test]
    fn only_staff_roles_are_staff() {
        assert!(Role::AdminStaff.is_staff());
        assert!(Role::SupplierStaff.is_staff());
        assert!(Role::DropshipperStaff.is_staff());
        assert!(!Role::Admin.is_staff());
        assert!(!Role::Supplier.is_staff());
        assert!(!Role::Dropshipper.is_staff());
    }

    #[test]
    fn panel_follows_main_role() {
        assert_eq!(Role::SupplierStaff.panel(), Panel::Supplier);
        assert_eq!(Role::Dropshipper.panel(), Panel::Dropshipper);
        assert_eq!(Role::AdminStaff.panel(), Panel::Admin);
    }
}
