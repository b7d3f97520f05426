pub mod admin;
pub mod dropshipper;
pub mod health;
pub mod supplier;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/suppliers                       list, create
/// /admin/suppliers/{id}                  get, update, soft-delete
/// /admin/suppliers/{id}/restore          restore (POST)
/// /admin/suppliers/bulk-delete           bulk soft-delete (POST)
/// /admin/suppliers/permanent-delete      purge soft-deleted (POST)
/// /admin/dropshippers/...                same shape as suppliers
/// /admin/staff                           list (?role=), create
/// /admin/staff/{id}                      update, soft-delete
/// /admin/staff/{id}/restore              restore (POST)
/// /admin/staff/{id}/permissions          get, replace (GET, PUT)
/// /admin/states/...                      list, create, update, delete, restore, bulk
/// /admin/cities/...                      same shape as states (?state_id= on list)
///
/// /supplier/products/...                 list, create, get, update, delete,
///                                        restore, bulk-delete, permanent-delete
/// /supplier/warehouses/...               same shape as products
///
/// /dropshipper/orders                    list (?status=)
/// /dropshipper/orders/{id}               get, soft-delete
/// /dropshipper/orders/{id}/restore       restore (POST)
/// /dropshipper/orders/bulk-delete        bulk soft-delete (POST)
///
/// /webhooks/shopify/orders               signed order ingest (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin portal (account management + reference data).
        .nest("/admin", admin::router())
        // Supplier portal (inventory).
        .nest("/supplier", supplier::router())
        // Dropshipper portal (orders).
        .nest("/dropshipper", dropshipper::router())
        // Inbound webhooks (HMAC-authenticated, no identity headers).
        .nest("/webhooks", webhooks::router())
}
