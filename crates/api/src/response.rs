//! Success response envelope helpers.
//!
//! All success responses use the `{status: true, ...}` envelope with the
//! payload keyed by its entity name, e.g. `{"status": true, "suppliers":
//! [...]}`. Use these helpers instead of ad-hoc `json!` literals so the
//! envelope shape stays consistent across handlers.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use backoffice_db::models::bulk::BulkDeleteOutcome;

/// `{status: true, <key>: <data>}`
pub fn ok_entity<T: Serialize>(key: &str, data: &T) -> Json<Value> {
    Json(json!({ "status": true, key: data }))
}

/// `{status: true, message: <msg>}`
pub fn ok_message(msg: &str) -> Json<Value> {
    Json(json!({ "status": true, "message": msg }))
}

/// `{status: true, deleted: [...], not_deleted: [{id, reason}, ...]}`
pub fn ok_outcome(outcome: &BulkDeleteOutcome) -> Json<Value> {
    Json(json!({
        "status": true,
        "deleted": outcome.deleted,
        "not_deleted": outcome.not_deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_envelope_carries_status_and_key() {
        let Json(value) = ok_entity("suppliers", &vec![1, 2, 3]);
        assert_eq!(value["status"], true);
        assert_eq!(value["suppliers"], json!([1, 2, 3]));
    }

    #[test]
    fn outcome_envelope_has_both_partitions() {
        let mut outcome = BulkDeleteOutcome::default();
        outcome.record_deleted(4);
        outcome.record_skipped(9, "not found");

        let Json(value) = ok_outcome(&outcome);
        assert_eq!(value["status"], true);
        assert_eq!(value["deleted"], json!([4]));
        assert_eq!(value["not_deleted"][0]["id"], 9);
        assert_eq!(value["not_deleted"][0]["reason"], "not found");
    }
}
