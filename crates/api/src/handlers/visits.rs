//! Handlers for the `/visits` resource: the slot booking workflow.
//!
//! A visit slot is a mutually exclusive resource: it is held by at most one
//! user at a time. The claim itself happens in a single conditional UPDATE
//! inside [`VisitRepo::book`], so two racing booking requests cannot both
//! succeed; the loser is told the slot is taken.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sanctuary_core::types::DbId;
use sanctuary_db::models::visit::{CreateVisit, UpdateVisit};
use sanctuary_db::repositories::{UserRepo, VisitRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listing and detail
// ---------------------------------------------------------------------------

/// GET /api/v1/visits
///
/// List all currently available slots. Booked slots are not shown; there is
/// no pagination.
pub async fn list_visits(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let visits = VisitRepo::list_available(&state.pool).await?;

    Ok(Json(DataResponse { data: visits }))
}

/// GET /api/v1/visits/all
///
/// List every slot, booked or not. Admin only.
pub async fn list_all_visits(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let visits = VisitRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse { data: visits }))
}

/// GET /api/v1/visits/mine
///
/// List the slots currently booked by the authenticated user.
pub async fn my_visits(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let visits = VisitRepo::list_booked_by_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: visits }))
}

/// GET /api/v1/visits/{id}
///
/// Fetch one slot regardless of its availability, so a user can still view
/// the details of a slot they have booked.
pub async fn get_visit(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(visit_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let visit = VisitRepo::find_by_id(&state.pool, visit_id)
        .await?
        .ok_or(AppError::not_found("Visit", visit_id))?;

    Ok(Json(DataResponse { data: visit }))
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// POST /api/v1/visits/{id}/book
///
/// Book a slot for the authenticated user.
///
/// Outcomes: 204 on success, 404 if the slot (or the user behind the token)
/// does not exist, 409 if the slot is already booked. A 409 is not
/// retryable -- the caller should pick another slot.
pub async fn book_visit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(visit_id): Path<DbId>,
) -> AppResult<StatusCode> {
    // The token can outlive the account; resolve the user row before
    // touching the slot so a dangling id mutates nothing.
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    let claimed = VisitRepo::book(&state.pool, visit_id, user.id).await?;

    if !claimed {
        // The claim failed either because the slot is gone or because
        // someone else holds it. Look once to tell the two apart.
        return match VisitRepo::find_by_id(&state.pool, visit_id).await? {
            Some(_) => Err(AppError::conflict("Visit slot is already booked")),
            None => Err(AppError::not_found("Visit", visit_id)),
        };
    }

    tracing::info!(visit_id, user_id = user.id, "Visit booked");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/visits/{id}/cancel
///
/// Release a slot back to the available pool. Cancelling a slot that is
/// already available re-asserts the same state.
pub async fn cancel_visit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(visit_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let released = VisitRepo::cancel(&state.pool, visit_id).await?;

    if !released {
        return Err(AppError::not_found("Visit", visit_id));
    }

    tracing::info!(visit_id, user_id = auth.user_id, "Visit cancelled");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Slot management (admin)
// ---------------------------------------------------------------------------

/// POST /api/v1/visits
///
/// Create a new slot. New slots are available with no holder. Overlapping
/// time windows are permitted.
pub async fn create_visit(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVisit>,
) -> AppResult<impl IntoResponse> {
    let visit = VisitRepo::create(&state.pool, &input).await?;

    tracing::info!(visit_id = visit.id, user_id = admin.user_id, "Visit created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: visit })))
}

/// PUT /api/v1/visits/{id}
///
/// Reschedule a slot. Only the time window changes; the booking state is
/// untouched.
pub async fn update_visit(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(visit_id): Path<DbId>,
    Json(input): Json<UpdateVisit>,
) -> AppResult<impl IntoResponse> {
    let visit = VisitRepo::update_times(&state.pool, visit_id, &input)
        .await?
        .ok_or(AppError::not_found("Visit", visit_id))?;

    tracing::info!(visit_id, user_id = admin.user_id, "Visit rescheduled");

    Ok(Json(DataResponse { data: visit }))
}

/// DELETE /api/v1/visits/{id}
///
/// Remove a slot. A missing row is treated as already deleted, so the
/// response is 204 either way.
pub async fn delete_visit(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(visit_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = VisitRepo::delete(&state.pool, visit_id).await?;

    if removed {
        tracing::info!(visit_id, user_id = admin.user_id, "Visit deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
