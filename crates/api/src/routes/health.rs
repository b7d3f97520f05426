//! Root-level health endpoint, outside the `/api` portal tree.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health. A failed database ping reports `"degraded"` with a 200 body
/// rather than an error, so probes always get a readable payload.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = backoffice_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
