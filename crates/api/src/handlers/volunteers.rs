//! Handlers for the `/volunteer-tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sanctuary_core::types::DbId;
use sanctuary_db::models::volunteer::{CreateVolunteerTask, UpdateVolunteerTask};
use sanctuary_db::repositories::{UserRepo, VolunteerRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/volunteer-tasks
pub async fn list_tasks(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tasks = VolunteerRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/volunteer-tasks/mine
///
/// List the tasks the authenticated user has signed up for.
pub async fn my_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tasks = VolunteerRepo::list_by_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/volunteer-tasks/{id}
pub async fn get_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = VolunteerRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("VolunteerTask", task_id))?;

    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/volunteer-tasks
pub async fn create_task(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVolunteerTask>,
) -> AppResult<impl IntoResponse> {
    let task = VolunteerRepo::create(&state.pool, &input).await?;

    tracing::info!(task_id = task.id, user_id = admin.user_id, "Task created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PUT /api/v1/volunteer-tasks/{id}
pub async fn update_task(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateVolunteerTask>,
) -> AppResult<impl IntoResponse> {
    let task = VolunteerRepo::update(&state.pool, task_id, &input)
        .await?
        .ok_or(AppError::not_found("VolunteerTask", task_id))?;

    tracing::info!(task_id, user_id = admin.user_id, "Task updated");

    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/volunteer-tasks/{id}/join
///
/// Sign the authenticated user up for a task. Joining twice is a no-op.
pub async fn join_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    VolunteerRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("VolunteerTask", task_id))?;

    VolunteerRepo::add_user(&state.pool, task_id, user.id).await?;

    tracing::info!(task_id, user_id = user.id, "User joined task");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/volunteer-tasks/{id}/leave
///
/// Remove the authenticated user's sign-up.
pub async fn leave_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = VolunteerRepo::remove_user(&state.pool, task_id, auth.user_id).await?;

    if !removed {
        return Err(AppError::not_found("VolunteerTask", task_id));
    }

    tracing::info!(task_id, user_id = auth.user_id, "User left task");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/volunteer-tasks/{id}
pub async fn delete_task(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VolunteerRepo::delete(&state.pool, task_id).await?;

    if !deleted {
        return Err(AppError::not_found("VolunteerTask", task_id));
    }

    tracing::info!(task_id, user_id = admin.user_id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
