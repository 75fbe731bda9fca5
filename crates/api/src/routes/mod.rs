pub mod animals;
pub mod auth;
pub mod health;
pub mod users;
pub mod visits;
pub mod volunteers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /visits                              list available, create (admin)
/// /visits/all                          list every slot (admin)
/// /visits/mine                         authenticated user's bookings
/// /visits/{id}                         get, update (admin), delete (admin)
/// /visits/{id}/book                    book slot (POST)
/// /visits/{id}/cancel                  release slot (POST)
///
/// /animals                             list, create (admin)
/// /animals/{id}                        get, update (admin), delete (admin)
/// /animals/{id}/adopt                  adopt (POST)
///
/// /volunteer-tasks                     list, create (admin)
/// /volunteer-tasks/mine                authenticated user's sign-ups
/// /volunteer-tasks/{id}                get, update (admin), delete (admin)
/// /volunteer-tasks/{id}/join           sign up (POST)
/// /volunteer-tasks/{id}/leave          withdraw (POST)
///
/// /users                               list
/// /users/{id}                          get, update (self or admin), delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/visits", visits::router())
        .nest("/animals", animals::router())
        .nest("/volunteer-tasks", volunteers::router())
        .nest("/users", users::router())
}
