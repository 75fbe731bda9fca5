//! Route definitions for the visit booking workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Visit routes mounted at `/visits`.
///
/// ```text
/// GET    /             -> list_visits (available only)
/// GET    /all          -> list_all_visits (admin)
/// GET    /mine         -> my_visits
/// POST   /             -> create_visit (admin)
/// GET    /{id}         -> get_visit
/// PUT    /{id}         -> update_visit (admin)
/// DELETE /{id}         -> delete_visit (admin)
/// POST   /{id}/book    -> book_visit
/// POST   /{id}/cancel  -> cancel_visit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visits::list_visits).post(visits::create_visit))
        .route("/all", get(visits::list_all_visits))
        .route("/mine", get(visits::my_visits))
        .route(
            "/{id}",
            get(visits::get_visit)
                .put(visits::update_visit)
                .delete(visits::delete_visit),
        )
        .route("/{id}/book", post(visits::book_visit))
        .route("/{id}/cancel", post(visits::cancel_visit))
}
