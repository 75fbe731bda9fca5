//! Handlers for the `/users` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sanctuary_core::error::CoreError;
use sanctuary_core::roles::ROLE_ADMIN;
use sanctuary_core::types::DbId;
use sanctuary_db::models::user::{UpdateUser, UserResponse};
use sanctuary_db::repositories::{RoleRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
///
/// List all registered users with resolved role names.
pub async fn list_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;

    // One role lookup for the whole listing instead of one per row.
    let roles: HashMap<DbId, String> = RoleRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect();

    let data: Vec<UserResponse> = users
        .into_iter()
        .map(|u| {
            let role = roles
                .get(&u.role_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            UserResponse::from_user(u, role)
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::not_found("User", user_id))?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: UserResponse::from_user(user, role),
    }))
}

/// PUT /api/v1/users/{id}
///
/// Update profile fields. Users may edit themselves; admins may edit anyone.
pub async fn update_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    if auth.user_id != user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot modify another user's profile".into(),
        )));
    }

    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::not_found("User", user_id))?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    tracing::info!(user_id, editor_id = auth.user_id, "User updated");

    Ok(Json(DataResponse {
        data: UserResponse::from_user(user, role),
    }))
}

/// DELETE /api/v1/users/{id}
///
/// Remove an account and release any visit slots it holds. Admin only.
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, user_id).await?;

    if !deleted {
        return Err(AppError::not_found("User", user_id));
    }

    tracing::info!(user_id, admin_id = admin.user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
