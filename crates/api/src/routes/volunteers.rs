//! Route definitions for volunteer tasks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::volunteers;
use crate::state::AppState;

/// Volunteer task routes mounted at `/volunteer-tasks`.
///
/// ```text
/// GET    /            -> list_tasks
/// POST   /            -> create_task (admin)
/// GET    /mine        -> my_tasks
/// GET    /{id}        -> get_task
/// PUT    /{id}        -> update_task (admin)
/// DELETE /{id}        -> delete_task (admin)
/// POST   /{id}/join   -> join_task
/// POST   /{id}/leave  -> leave_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(volunteers::list_tasks).post(volunteers::create_task))
        .route("/mine", get(volunteers::my_tasks))
        .route(
            "/{id}",
            get(volunteers::get_task)
                .put(volunteers::update_task)
                .delete(volunteers::delete_task),
        )
        .route("/{id}/join", post(volunteers::join_task))
        .route("/{id}/leave", post(volunteers::leave_task))
}
