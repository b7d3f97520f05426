//! Soft-delete list filters.

use serde::{Deserialize, Serialize};

/// Visibility filter for list queries over soft-deletable tables.
///
/// `Active` additionally requires the `is_active` flag; `NotDeleted` only
/// excludes soft-deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteFilter {
    Active,
    Deleted,
    NotDeleted,
}

impl DeleteFilter {
    /// SQL predicate for this filter, suitable for appending to a WHERE clause.
    pub fn predicate(&self) -> &'static str {
        match self {
            DeleteFilter::Active => "deleted_at IS NULL AND is_active = TRUE",
            DeleteFilter::Deleted => "deleted_at IS NOT NULL",
            DeleteFilter::NotDeleted => "deleted_at IS NULL",
        }
    }
}

impl Default for DeleteFilter {
    fn default() -> Self {
        DeleteFilter::NotDeleted
    }
}
