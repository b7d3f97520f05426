//! Route definitions for the admin portal.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{cities, dropshippers, staff, states, suppliers};
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the `x-admin-id` / `x-admin-role`
/// identity headers.
///
/// ```text
/// GET    /suppliers                      -> list_suppliers (?status=active|deleted|not_deleted)
/// POST   /suppliers                      -> create_supplier
/// GET    /suppliers/{id}                 -> get_supplier
/// PUT    /suppliers/{id}                 -> update_supplier
/// DELETE /suppliers/{id}                 -> delete_supplier (soft)
/// POST   /suppliers/{id}/restore         -> restore_supplier
/// POST   /suppliers/bulk-delete          -> bulk_delete_suppliers
/// POST   /suppliers/permanent-delete     -> permanent_delete_suppliers
///
/// /dropshippers                          same shape as /suppliers
///
/// GET    /staff                          -> list_staff (?role=)
/// POST   /staff                          -> create_staff
/// GET    /staff/{id}                     -> get_staff
/// PUT    /staff/{id}                     -> update_staff
/// DELETE /staff/{id}                     -> delete_staff (soft)
/// POST   /staff/{id}/restore             -> restore_staff
/// GET    /staff/{id}/permissions         -> get_staff_permissions
/// PUT    /staff/{id}/permissions         -> replace_staff_permissions
///
/// GET    /states                         -> list_states
/// POST   /states                         -> create_state
/// PUT    /states/{id}                    -> update_state
/// DELETE /states/{id}                    -> delete_state (soft)
/// POST   /states/{id}/restore            -> restore_state
/// POST   /states/bulk-delete             -> bulk_delete_states
/// POST   /states/permanent-delete        -> permanent_delete_states
///
/// /cities                                same shape as /states (?state_id= on list)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Supplier accounts.
        .route(
            "/suppliers",
            get(suppliers::list_suppliers).post(suppliers::create_supplier),
        )
        .route(
            "/suppliers/{id}",
            get(suppliers::get_supplier)
                .put(suppliers::update_supplier)
                .delete(suppliers::delete_supplier),
        )
        .route("/suppliers/{id}/restore", post(suppliers::restore_supplier))
        .route("/suppliers/bulk-delete", post(suppliers::bulk_delete_suppliers))
        .route(
            "/suppliers/permanent-delete",
            post(suppliers::permanent_delete_suppliers),
        )
        // Dropshipper accounts.
        .route(
            "/dropshippers",
            get(dropshippers::list_dropshippers).post(dropshippers::create_dropshipper),
        )
        .route(
            "/dropshippers/{id}",
            get(dropshippers::get_dropshipper)
                .put(dropshippers::update_dropshipper)
                .delete(dropshippers::delete_dropshipper),
        )
        .route(
            "/dropshippers/{id}/restore",
            post(dropshippers::restore_dropshipper),
        )
        .route(
            "/dropshippers/bulk-delete",
            post(dropshippers::bulk_delete_dropshippers),
        )
        .route(
            "/dropshippers/permanent-delete",
            post(dropshippers::permanent_delete_dropshippers),
        )
        // Staff accounts and their permission grants.
        .route("/staff", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/staff/{id}",
            get(staff::get_staff)
                .put(staff::update_staff)
                .delete(staff::delete_staff),
        )
        .route("/staff/{id}/restore", post(staff::restore_staff))
        .route(
            "/staff/{id}/permissions",
            get(staff::get_staff_permissions).put(staff::replace_staff_permissions),
        )
        // Geography reference data.
        .route("/states", get(states::list_states).post(states::create_state))
        .route(
            "/states/{id}",
            put(states::update_state).delete(states::delete_state),
        )
        .route("/states/{id}/restore", post(states::restore_state))
        .route("/states/bulk-delete", post(states::bulk_delete_states))
        .route("/states/permanent-delete", post(states::permanent_delete_states))
        .route("/cities", get(cities::list_cities).post(cities::create_city))
        .route(
            "/cities/{id}",
            put(cities::update_city).delete(cities::delete_city),
        )
        .route("/cities/{id}/restore", post(cities::restore_city))
        .route("/cities/bulk-delete", post(cities::bulk_delete_cities))
        .route("/cities/permanent-delete", post(cities::permanent_delete_cities))
}
