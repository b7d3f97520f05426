//! Outcome types for partitioned bulk operations.

use serde::Serialize;

use backoffice_core::types::DbId;

/// An id skipped by a bulk operation, with the reason it was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    pub id: DbId,
    pub reason: &'static str,
}

/// Result of a partitioned bulk delete.
///
/// Each id is processed independently; a failing id never aborts the rest of
/// the batch, so both partitions can be non-empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<DbId>,
    pub not_deleted: Vec<SkippedItem>,
}

impl BulkDeleteOutcome {
    pub fn record_deleted(&mut self, id: DbId) {
        self.deleted.push(id);
    }

    pub fn record_skipped(&mut self, id: DbId, reason: &'static str) {
        self.not_deleted.push(SkippedItem { id, reason });
    }
}
