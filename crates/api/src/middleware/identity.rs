//! Header-based identity extractors, one per portal.
//!
//! Each portal reads its own header pair (`x-<portal>-id` / `x-<portal>-role`)
//! and runs the Identity Resolver: the actor must exist for the claimed role,
//! and staff actors are resolved to their parent main account. Use these in
//! route handlers to get a verified [`Identity`]:
//!
//! ```ignore
//! async fn list(SupplierPortal(identity): SupplierPortal) -> AppResult<Json<Value>> {
//!     // identity.main_account_id owns the data, even for staff callers
//! }
//! ```
//!
//! There is no signature or session behind these headers; the service trusts
//! an upstream gateway to set them.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use backoffice_core::error::CoreError;
use backoffice_core::identity::Identity;
use backoffice_core::permissions::Panel;
use backoffice_core::roles::Role;
use backoffice_core::types::DbId;
use backoffice_db::repositories::IdentityRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Caller resolved through the admin portal headers.
pub struct AdminPortal(pub Identity);

/// Caller resolved through the supplier portal headers.
pub struct SupplierPortal(pub Identity);

/// Caller resolved through the dropshipper portal headers.
pub struct DropshipperPortal(pub Identity);

impl FromRequestParts<AppState> for AdminPortal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_portal(parts, state, Panel::Admin).await.map(AdminPortal)
    }
}

impl FromRequestParts<AppState> for SupplierPortal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_portal(parts, state, Panel::Supplier)
            .await
            .map(SupplierPortal)
    }
}

impl FromRequestParts<AppState> for DropshipperPortal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_portal(parts, state, Panel::Dropshipper)
            .await
            .map(DropshipperPortal)
    }
}

/// Read and validate the portal's header pair, then resolve the identity.
///
/// Missing or malformed headers are 400s; a role that does not belong to the
/// portal is a 400; an actor that resolves to no live row is a 404.
async fn resolve_portal(
    parts: &Parts,
    state: &AppState,
    panel: Panel,
) -> Result<Identity, AppError> {
    let portal = panel.as_str();

    let id_header = format!("x-{portal}-id");
    let raw_id = header_str(parts, &id_header)?;
    let actor_id: DbId = raw_id.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "{id_header} must be a numeric id"
        )))
    })?;

    let role_header = format!("x-{portal}-role");
    let raw_role = header_str(parts, &role_header)?;
    let role: Role = raw_role.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "{role_header} carries an unknown role"
        )))
    })?;
    if role.panel() != panel {
        return Err(AppError::Core(CoreError::Validation(format!(
            "role {role} is not valid for the {portal} portal"
        ))));
    }

    let entity = actor_entity(role, panel);
    IdentityRepo::resolve(&state.pool, actor_id, role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity,
            id: actor_id,
        }))
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Missing {name} header")))
        })
}

fn actor_entity(role: Role, panel: Panel) -> &'static str {
    if role.is_staff() {
        return "Staff";
    }
    match panel {
        Panel::Admin => "Admin",
        Panel::Supplier => "Supplier",
        Panel::Dropshipper => "Dropshipper",
    }
}
