//! Users API
//!
//! REST endpoints for user administration. Handlers trust the body
//! and proxy straight to the repository; there is no auth layer.

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

use crate::shared::error::{ApiError, ErrorBody};
use crate::user::entity::{User, UserStatus};
use crate::user::repository::UserRepository;

/// User fields minus the id, as accepted by create and update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
}

impl From<UserPayload> for User {
    fn from(p: UserPayload) -> Self {
        User::new(p.name, p.email, p.role, p.status)
    }
}

/// User as it appears on the wire, id as a hex string under `_id`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: u.name,
            email: u.email,
            role: u.role,
            status: u.status,
        }
    }
}

/// Users service state
#[derive(Clone)]
pub struct UsersState {
    pub user_repo: Arc<UserRepository>,
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(
    State(state): State<UsersState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Store validation failure", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<UsersState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_repo
        .insert(payload.into())
        .await
        .map_err(ApiError::into_bad_request)?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replace a user by id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 400, description = "Store validation failure", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<UsersState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::validation(format!("invalid user id: {}", id)))?;

    let updated = state
        .user_repo
        .replace(oid, payload.into())
        .await
        .map_err(ApiError::into_bad_request)?
        .ok_or(ApiError::not_found("User"))?;

    Ok(Json(updated.into()))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<UsersState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::internal(format!("invalid user id: {}", id)))?;

    if !state.user_repo.delete(oid).await? {
        return Err(ApiError::not_found("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Create the users router
pub fn users_router(state: UsersState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_users, create_user))
        .routes(routes!(update_user, delete_user))
        .with_state(state)
}
