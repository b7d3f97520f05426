//! Shared query parameter types for API handlers.

use serde::Deserialize;

use backoffice_core::filter::DeleteFilter;
use backoffice_core::types::DbId;

/// `?status=active|deleted|not_deleted` on list endpoints.
///
/// Defaults to `not_deleted` when absent.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<DeleteFilter>,
}

/// Body of bulk-delete and permanent-delete endpoints.
#[derive(Debug, Deserialize)]
pub struct BulkIds {
    pub ids: Vec<DbId>,
}

/// Optional city-list restriction (`?state_id=`).
#[derive(Debug, Deserialize)]
pub struct CityListParams {
    pub status: Option<DeleteFilter>,
    pub state_id: Option<DbId>,
}

/// Optional staff-list restriction (`?role=`).
#[derive(Debug, Deserialize)]
pub struct StaffListParams {
    pub status: Option<DeleteFilter>,
    pub role: Option<String>,
}
