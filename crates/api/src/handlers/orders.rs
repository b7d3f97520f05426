//! Dropshipper-portal handlers for orders.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::types::DbId;
use backoffice_db::repositories::OrderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::DropshipperPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::{BulkIds, ListParams};
use crate::response::{ok_entity, ok_message, ok_outcome};
use crate::state::AppState;

/// GET /api/dropshipper/orders
pub async fn list_orders(
    DropshipperPortal(identity): DropshipperPortal,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::ORDERS, Action::View).await?;

    let orders = OrderRepo::list(
        &state.pool,
        identity.main_account_id,
        params.status.unwrap_or_default(),
    )
    .await?;
    Ok(ok_entity("orders", &orders))
}

/// GET /api/dropshipper/orders/{id}
pub async fn get_order(
    DropshipperPortal(identity): DropshipperPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::ORDERS, Action::View).await?;

    let order = OrderRepo::find_by_id(&state.pool, identity.main_account_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
    Ok(ok_entity("order", &order))
}

/// DELETE /api/dropshipper/orders/{id}
pub async fn delete_order(
    DropshipperPortal(identity): DropshipperPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::ORDERS, Action::Delete).await?;

    let deleted = OrderRepo::soft_delete(
        &state.pool,
        identity.main_account_id,
        id,
        &deleter_of(&identity),
    )
    .await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Order", id }));
    }

    tracing::info!(
        order_id = id,
        dropshipper_id = identity.main_account_id,
        actor_id = identity.actor_id,
        "Order deleted",
    );

    Ok(ok_message("Order deleted successfully"))
}

/// POST /api/dropshipper/orders/{id}/restore
pub async fn restore_order(
    DropshipperPortal(identity): DropshipperPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::ORDERS, Action::Restore).await?;

    if !OrderRepo::restore(&state.pool, identity.main_account_id, id).await? {
        OrderRepo::find_by_id(&state.pool, identity.main_account_id, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Order", id }))?;
    }

    Ok(ok_message("Order restored successfully"))
}

/// POST /api/dropshipper/orders/bulk-delete
pub async fn bulk_delete_orders(
    DropshipperPortal(identity): DropshipperPortal,
    State(state): State<AppState>,
    Json(input): Json<BulkIds>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::ORDERS, Action::Delete).await?;

    if input.ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".into()));
    }

    let outcome = OrderRepo::bulk_soft_delete(
        &state.pool,
        identity.main_account_id,
        &input.ids,
        &deleter_of(&identity),
    )
    .await?;

    tracing::info!(
        dropshipper_id = identity.main_account_id,
        actor_id = identity.actor_id,
        deleted = outcome.deleted.len(),
        skipped = outcome.not_deleted.len(),
        "Orders bulk-deleted",
    );

    Ok(ok_outcome(&outcome))
}
