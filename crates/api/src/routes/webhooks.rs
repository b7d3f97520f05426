//! Route definitions for inbound webhooks.

use axum::routing::post;
use axum::Router;

use crate::handlers::shopify;
use crate::state::AppState;

/// Routes mounted at `/webhooks`. No identity headers; authentication is the
/// HMAC signature carried by the delivery itself.
///
/// ```text
/// POST /shopify/orders   -> receive_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/shopify/orders", post(shopify::receive_order))
}
