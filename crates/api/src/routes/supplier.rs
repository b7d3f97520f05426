//! Route definitions for the supplier portal.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{products, warehouses};
use crate::state::AppState;

/// Routes mounted at `/supplier`. All require the `x-supplier-id` /
/// `x-supplier-role` identity headers; every query is scoped to the resolved
/// supplier main account.
///
/// ```text
/// GET    /products                      -> list_products (?status=)
/// POST   /products                      -> create_product
/// GET    /products/{id}                 -> get_product
/// PUT    /products/{id}                 -> update_product
/// DELETE /products/{id}                 -> delete_product (soft)
/// POST   /products/{id}/restore         -> restore_product
/// POST   /products/bulk-delete          -> bulk_delete_products
/// POST   /products/permanent-delete     -> permanent_delete_products
///
/// /warehouses                           same shape as /products
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/{id}/restore", post(products::restore_product))
        .route("/products/bulk-delete", post(products::bulk_delete_products))
        .route(
            "/products/permanent-delete",
            post(products::permanent_delete_products),
        )
        .route(
            "/warehouses",
            get(warehouses::list_warehouses).post(warehouses::create_warehouse),
        )
        .route(
            "/warehouses/{id}",
            get(warehouses::get_warehouse)
                .put(warehouses::update_warehouse)
                .delete(warehouses::delete_warehouse),
        )
        .route("/warehouses/{id}/restore", post(warehouses::restore_warehouse))
        .route("/warehouses/bulk-delete", post(warehouses::bulk_delete_warehouses))
        .route(
            "/warehouses/permanent-delete",
            post(warehouses::permanent_delete_warehouses),
        )
}
