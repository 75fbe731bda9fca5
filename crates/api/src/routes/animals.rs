//! Route definitions for animals.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::animals;
use crate::state::AppState;

/// Animal routes mounted at `/animals`.
///
/// ```text
/// GET    /            -> list_animals
/// POST   /            -> create_animal (admin)
/// GET    /{id}        -> get_animal
/// PUT    /{id}        -> update_animal (admin)
/// DELETE /{id}        -> delete_animal (admin)
/// POST   /{id}/adopt  -> adopt_animal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animals::list_animals).post(animals::create_animal))
        .route(
            "/{id}",
            get(animals::get_animal)
                .put(animals::update_animal)
                .delete(animals::delete_animal),
        )
        .route("/{id}/adopt", post(animals::adopt_animal))
}
