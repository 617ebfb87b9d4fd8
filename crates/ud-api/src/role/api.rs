//! Roles API
//!
//! REST endpoints for role management, same shape as the users API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::role::entity::Role;
use crate::role::repository::RoleRepository;
use crate::shared::error::{ApiError, ErrorBody};

/// Role fields minus the id, as accepted by create and update
#[derive(Debug, Deserialize, ToSchema)]
pub struct RolePayload {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl From<RolePayload> for Role {
    fn from(p: RolePayload) -> Self {
        Role::new(p.name, p.permissions)
    }
}

/// Role as it appears on the wire, id as a hex string under `_id`
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        Self {
            id: r.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: r.name,
            permissions: r.permissions,
        }
    }
}

/// Roles service state
#[derive(Clone)]
pub struct RolesState {
    pub role_repo: Arc<RoleRepository>,
}

/// List all roles
#[utoipa::path(
    get,
    path = "",
    tag = "roles",
    responses(
        (status = 200, description = "All roles", body = [RoleResponse]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_roles(
    State(state): State<RolesState>,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let roles = state.role_repo.find_all().await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

/// Create a role
#[utoipa::path(
    post,
    path = "",
    tag = "roles",
    request_body = RolePayload,
    responses(
        (status = 201, description = "Role created", body = RoleResponse),
        (status = 400, description = "Store validation failure", body = ErrorBody)
    )
)]
pub async fn create_role(
    State(state): State<RolesState>,
    Json(payload): Json<RolePayload>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    let role = state
        .role_repo
        .insert(payload.into())
        .await
        .map_err(ApiError::into_bad_request)?;
    Ok((StatusCode::CREATED, Json(role.into())))
}

/// Replace a role by id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "roles",
    params(("id" = String, Path, description = "Role id")),
    request_body = RolePayload,
    responses(
        (status = 200, description = "Role updated", body = RoleResponse),
        (status = 404, description = "Role not found", body = ErrorBody),
        (status = 400, description = "Store validation failure", body = ErrorBody)
    )
)]
pub async fn update_role(
    State(state): State<RolesState>,
    Path(id): Path<String>,
    Json(payload): Json<RolePayload>,
) -> Result<Json<RoleResponse>, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::validation(format!("invalid role id: {}", id)))?;

    let updated = state
        .role_repo
        .replace(oid, payload.into())
        .await
        .map_err(ApiError::into_bad_request)?
        .ok_or(ApiError::not_found("Role"))?;

    Ok(Json(updated.into()))
}

/// Delete a role by id
///
/// Deletion is unguarded: users referencing the role keep the stale
/// name string.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "roles",
    params(("id" = String, Path, description = "Role id")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_role(
    State(state): State<RolesState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::internal(format!("invalid role id: {}", id)))?;

    if !state.role_repo.delete(oid).await? {
        return Err(ApiError::not_found("Role"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Create the roles router
pub fn roles_router(state: RolesState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_roles, create_role))
        .routes(routes!(update_role, delete_role))
        .with_state(state)
}
