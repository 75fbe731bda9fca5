//! Handlers for the `/animals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sanctuary_core::types::DbId;
use sanctuary_db::models::animal::{CreateAnimal, UpdateAnimal};
use sanctuary_db::repositories::{AnimalRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/animals
pub async fn list_animals(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let animals = AnimalRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: animals }))
}

/// GET /api/v1/animals/{id}
pub async fn get_animal(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(animal_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let animal = AnimalRepo::find_by_id(&state.pool, animal_id)
        .await?
        .ok_or(AppError::not_found("Animal", animal_id))?;

    Ok(Json(DataResponse { data: animal }))
}

/// POST /api/v1/animals
pub async fn create_animal(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAnimal>,
) -> AppResult<impl IntoResponse> {
    let animal = AnimalRepo::create(&state.pool, &input).await?;

    tracing::info!(
        animal_id = animal.id,
        user_id = admin.user_id,
        "Animal created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: animal })))
}

/// PUT /api/v1/animals/{id}
pub async fn update_animal(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(animal_id): Path<DbId>,
    Json(input): Json<UpdateAnimal>,
) -> AppResult<impl IntoResponse> {
    let animal = AnimalRepo::update(&state.pool, animal_id, &input)
        .await?
        .ok_or(AppError::not_found("Animal", animal_id))?;

    tracing::info!(animal_id, user_id = admin.user_id, "Animal updated");

    Ok(Json(DataResponse { data: animal }))
}

/// POST /api/v1/animals/{id}/adopt
///
/// Record an adoption by the authenticated user. A later adoption replaces
/// an earlier one.
pub async fn adopt_animal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(animal_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let adopter = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    let animal = AnimalRepo::adopt(&state.pool, animal_id, adopter.id)
        .await?
        .ok_or(AppError::not_found("Animal", animal_id))?;

    tracing::info!(animal_id, user_id = adopter.id, "Animal adopted");

    Ok(Json(DataResponse { data: animal }))
}

/// DELETE /api/v1/animals/{id}
pub async fn delete_animal(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(animal_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnimalRepo::delete(&state.pool, animal_id).await?;

    if !deleted {
        return Err(AppError::not_found("Animal", animal_id));
    }

    tracing::info!(animal_id, user_id = admin.user_id, "Animal deleted");

    Ok(StatusCode::NO_CONTENT)
}
