//! Admin-portal handlers for staff accounts and their permission sets.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use backoffice_core::error::CoreError;
use backoffice_core::permissions::{modules, Action};
use backoffice_core::roles::Role;
use backoffice_core::types::DbId;
use backoffice_db::models::permission::ReplacePermissions;
use backoffice_db::models::staff::{CreateStaff, UpdateStaff};
use backoffice_db::repositories::{IdentityRepo, PermissionRepo, StaffRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::AdminPortal;
use crate::middleware::permissions::{authorize, deleter_of};
use crate::query::StaffListParams;
use crate::response::{ok_entity, ok_message};
use crate::state::AppState;

/// GET /api/admin/staff (optionally `?role=`)
pub async fn list_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Query(params): Query<StaffListParams>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::View).await?;

    let staff = StaffRepo::list(
        &state.pool,
        params.role.as_deref(),
        params.status.unwrap_or_default(),
    )
    .await?;
    Ok(ok_entity("staff", &staff))
}

/// GET /api/admin/staff/{id}
pub async fn get_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::View).await?;

    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    Ok(ok_entity("staff", &staff))
}

/// POST /api/admin/staff
pub async fn create_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Json(input): Json<CreateStaff>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::Add).await?;

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if !input.email.contains('@') {
        return Err(AppError::BadRequest("email must be a valid address".into()));
    }
    let role: Role = input
        .role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown role: {}", input.role)))?;
    if !role.is_staff() {
        return Err(AppError::BadRequest(format!(
            "{role} is not a staff role"
        )));
    }
    // The parent main account must resolve before a staff member can hang
    // off it.
    IdentityRepo::resolve(&state.pool, input.parent_id, role.main_role())
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "parent {} account {} does not exist",
                role.main_role(),
                input.parent_id
            ))
        })?;

    let staff = StaffRepo::create(&state.pool, &input).await?;

    tracing::info!(
        staff_id = staff.id,
        parent_id = staff.parent_id,
        role = %staff.role,
        actor_id = identity.actor_id,
        "Staff member created",
    );

    Ok((StatusCode::CREATED, ok_entity("staff", &staff)))
}

/// PUT /api/admin/staff/{id}
pub async fn update_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::Edit).await?;

    let updated = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;

    Ok(ok_entity("staff", &updated))
}

/// DELETE /api/admin/staff/{id}
pub async fn delete_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::Delete).await?;

    if !StaffRepo::soft_delete(&state.pool, id, &deleter_of(&identity)).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }));
    }

    tracing::info!(staff_id = id, actor_id = identity.actor_id, "Staff member deleted");

    Ok(ok_message("Staff member deleted successfully"))
}

/// POST /api/admin/staff/{id}/restore
pub async fn restore_staff(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::STAFF, Action::Restore).await?;

    if !StaffRepo::restore(&state.pool, id).await? {
        StaffRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;
    }

    Ok(ok_message("Staff member restored successfully"))
}

/// GET /api/admin/staff/{id}/permissions
pub async fn get_staff_permissions(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PERMISSIONS, Action::View).await?;

    StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;

    let permissions = PermissionRepo::list_for_staff(&state.pool, id).await?;
    Ok(ok_entity("permissions", &permissions))
}

/// PUT /api/admin/staff/{id}/permissions
///
/// Replace the staff member's full permission set. Takes effect on the next
/// gated request; the gate re-queries on every call.
pub async fn replace_staff_permissions(
    AdminPortal(identity): AdminPortal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplacePermissions>,
) -> AppResult<impl IntoResponse> {
    authorize(&state.pool, &identity, modules::PERMISSIONS, Action::Edit).await?;

    StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))?;

    let permissions =
        PermissionRepo::replace_for_staff(&state.pool, id, &input.permissions).await?;

    tracing::info!(
        staff_id = id,
        count = permissions.len(),
        actor_id = identity.actor_id,
        "Staff permissions replaced",
    );

    Ok(ok_entity("permissions", &permissions))
}
