//! HTTP-level integration tests for the animal and volunteer task endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, delete, get, post, post_json, put_json};

fn animal_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "species": "cat",
        "breed": "tabby",
        "age": 2,
        "adoption_status": "available",
    })
}

fn task_body(task: &str) -> serde_json::Value {
    serde_json::json!({
        "task": task,
        "start_time": "2026-09-05T08:00:00Z",
        "end_time": "2026-09-05T12:00:00Z",
    })
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animal_crud_roundtrip(pool: PgPool) {
    let admin = common::admin_token(&pool, "keeper").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/animals",
        &admin,
        animal_body("Mittens"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let animal_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/animals/{animal_id}"),
        &admin,
        serde_json::json!({ "age": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["age"], 3);
    assert_eq!(json["data"]["name"], "Mittens");

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/animals/{animal_id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/animals/{animal_id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animal_mutation_requires_admin(pool: PgPool) {
    let user = common::user_token(&pool, "plain").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/animals",
        &user,
        animal_body("Rejected"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adopt_animal(pool: PgPool) {
    let admin = common::admin_token(&pool, "keeper").await;
    let user = common::user_token(&pool, "adopter").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/animals",
        &admin,
        animal_body("Shadow"),
    )
    .await;
    let animal_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/animals/{animal_id}/adopt"),
        &user,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_adopted"], true);
    assert!(json["data"]["adopter_id"].is_number());

    let response = post(
        common::build_test_app(pool),
        "/api/v1/animals/999999/adopt",
        &user,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Volunteer tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_volunteer_task_crud_roundtrip(pool: PgPool) {
    let admin = common::admin_token(&pool, "keeper").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/volunteer-tasks",
        &admin,
        task_body("Clean kennels"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let task_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/volunteer-tasks/{task_id}"),
        &admin,
        serde_json::json!({ "task": "Clean kennels and yard" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["task"], "Clean kennels and yard");

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/volunteer-tasks/{task_id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_join_and_leave_task(pool: PgPool) {
    let admin = common::admin_token(&pool, "keeper").await;
    let user = common::user_token(&pool, "helper").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/volunteer-tasks",
        &admin,
        task_body("Walk dogs"),
    )
    .await;
    let task_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/volunteer-tasks/{task_id}/join"),
        &user,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/volunteer-tasks/mine",
            &user,
        )
        .await,
    )
    .await;
    let mine = json["data"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["id"], task_id);

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/volunteer-tasks/{task_id}/leave"),
        &user,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/volunteer-tasks/mine",
            &user,
        )
        .await,
    )
    .await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_join_missing_task_returns_404(pool: PgPool) {
    let user = common::user_token(&pool, "helper").await;

    let response = post(
        common::build_test_app(pool),
        "/api/v1/volunteer-tasks/999999/join",
        &user,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_cannot_edit_another_users_profile(pool: PgPool) {
    let _owner = common::user_token(&pool, "owner").await;
    let intruder = common::user_token(&pool, "intruder").await;

    // Resolve the owner's id through the listing.
    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/users",
            &intruder,
        )
        .await,
    )
    .await;
    let owner_id = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "owner")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/users/{owner_id}"),
        &intruder,
        serde_json::json!({ "first_name": "Hacked" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_deletes_user_and_releases_their_slot(pool: PgPool) {
    let admin = common::admin_token(&pool, "keeper").await;
    let user = common::user_token(&pool, "doomed").await;

    // The user books a slot, then the account is removed.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/visits",
        &admin,
        serde_json::json!({
            "start_time": "2026-09-01T09:00:00Z",
            "end_time": "2026-09-01T10:00:00Z",
        }),
    )
    .await;
    let visit_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/visits/{visit_id}/book"),
        &user,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/users",
            &admin,
        )
        .await,
    )
    .await;
    let user_id = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "doomed")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{user_id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The slot is back in the pool.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/visits/{visit_id}"),
        &admin,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], true);
    assert!(json["data"]["user_id"].is_null());
}
