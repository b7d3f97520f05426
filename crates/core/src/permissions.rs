//! Permission vocabulary: panels, modules, and actions.
//!
//! A staff permission record is an exact `(panel, module, action)` triple with
//! a boolean status. The strings here must match the values stored in the
//! `staff_permissions` table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Portal panel a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Admin,
    Supplier,
    Dropshipper,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Admin => "admin",
            Panel::Supplier => "supplier",
            Panel::Dropshipper => "dropshipper",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action a permission grants on a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
    Restore,
    PermanentDelete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Restore => "restore",
            Action::PermanentDelete => "permanent_delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known module names, one per gated resource.
pub mod modules {
    pub const SUPPLIERS: &str = "suppliers";
    pub const DROPSHIPPERS: &str = "dropshippers";
    pub const STAFF: &str = "staff";
    pub const PERMISSIONS: &str = "permissions";
    pub const STATES: &str = "states";
    pub const CITIES: &str = "cities";
    pub const PRODUCTS: &str = "products";
    pub const WAREHOUSES: &str = "warehouses";
    pub const ORDERS: &str = "orders";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_strings_are_snake_case() {
        assert_eq!(Action::PermanentDelete.as_str(), "permanent_delete");
        assert_eq!(Action::View.to_string(), "view");
    }

    #[test]
    fn panel_serde_round_trip() {
        let json = serde_json::to_string(&Panel::Dropshipper).unwrap();
        assert_eq!(json, "\"dropshipper\"");
        let back: Panel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Panel::Dropshipper);
    }
}
