//! Route definitions for the dropshipper portal.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/dropshipper`. All require the `x-dropshipper-id` /
/// `x-dropshipper-role` identity headers; every query is scoped to the
/// resolved dropshipper main account.
///
/// ```text
/// GET    /orders                  -> list_orders (?status=)
/// GET    /orders/{id}             -> get_order
/// DELETE /orders/{id}             -> delete_order (soft)
/// POST   /orders/{id}/restore     -> restore_order
/// POST   /orders/bulk-delete      -> bulk_delete_orders
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list_orders))
        .route(
            "/orders/{id}",
            get(orders::get_order).delete(orders::delete_order),
        )
        .route("/orders/{id}/restore", post(orders::restore_order))
        .route("/orders/bulk-delete", post(orders::bulk_delete_orders))
}
