//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt::oneshot`,
//! no TCP listener involved. The router is built through the same
//! [`build_app_router`] the production binary uses, so every test exercises
//! the full middleware stack.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sanctuary_api::auth::jwt::JwtConfig;
use sanctuary_api::config::ServerConfig;
use sanctuary_api::router::build_app_router;
use sanctuary_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn post(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, path, Some(token), None).await
}

pub async fn post_json(
    app: Router,
    path: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(token), Some(json)).await
}

pub async fn put_json(
    app: Router,
    path: &str,
    token: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, path, Some(token), Some(json)).await
}

pub async fn delete(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Send an unauthenticated request (register/login and negative auth tests).
pub async fn post_json_public(
    app: Router,
    path: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, None, Some(json)).await
}

pub async fn get_public(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register an account and log it in, returning a bearer access token.
///
/// An email ending in `@admin.com` yields an admin token.
pub async fn auth_token(pool: &PgPool, username: &str, email: &str) -> String {
    let password = "a-perfectly-fine-password";

    let response = post_json_public(
        build_test_app(pool.clone()),
        "/api/v1/auth/register",
        serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "first_name": "Test",
            "last_name": "User",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "register failed");

    let response = post_json_public(
        build_test_app(pool.clone()),
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login failed");

    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Shorthand for an admin token (email domain grants the role).
pub async fn admin_token(pool: &PgPool, username: &str) -> String {
    auth_token(pool, username, &format!("{username}@admin.com")).await
}

/// Shorthand for a regular user token.
pub async fn user_token(pool: &PgPool, username: &str) -> String {
    auth_token(pool, username, &format!("{username}@example.com")).await
}
