//! Integration tests for user, animal, and volunteer task CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Unique constraint violations (username, email)
//! - Partial updates via COALESCE
//! - Adoption assignment
//! - Volunteer sign-up membership

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use sanctuary_core::types::DbId;
use sanctuary_db::models::animal::{CreateAnimal, UpdateAnimal};
use sanctuary_db::models::user::{CreateUser, UpdateUser};
use sanctuary_db::models::volunteer::{CreateVolunteerTask, UpdateVolunteerTask};
use sanctuary_db::repositories::{AnimalRepo, RoleRepo, UserRepo, VolunteerRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, email: &str, role_id: DbId) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role_id,
    }
}

fn new_animal(name: &str) -> CreateAnimal {
    CreateAnimal {
        name: name.to_string(),
        species: "dog".to_string(),
        breed: Some("mixed".to_string()),
        gender: None,
        age: Some(3),
        description: None,
        adoption_status: Some("available".to_string()),
    }
}

fn new_task(task: &str) -> CreateVolunteerTask {
    let start = Utc::now() + Duration::days(3);
    CreateVolunteerTask {
        task: task.to_string(),
        start_time: start,
        end_time: start + Duration::hours(4),
    }
}

async fn user_role_id(pool: &PgPool) -> DbId {
    RoleRepo::find_by_name(pool, "user")
        .await
        .unwrap()
        .expect("seeded role")
        .id
}

// ---------------------------------------------------------------------------
// Users and roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roles_are_seeded(pool: PgPool) {
    let roles = RoleRepo::list(&pool).await.unwrap();
    let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
    assert!(names.contains(&"admin"));
    assert!(names.contains(&"user"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    let created = UserRepo::create(&pool, &new_user("alice", "alice@example.com", role_id))
        .await
        .unwrap();

    let by_id = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id.username, "alice");

    let by_username = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_username.id, created.id);

    let by_email = UserRepo::find_by_email(&pool, "alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    UserRepo::create(&pool, &new_user("bob", "bob@example.com", role_id))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("bob", "bob2@example.com", role_id))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_username")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    UserRepo::create(&pool, &new_user("carol", "carol@example.com", role_id))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &new_user("carol2", "carol@example.com", role_id))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_users_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_user_update(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    let created = UserRepo::create(&pool, &new_user("dave", "dave@example.com", role_id))
        .await
        .unwrap();

    let updated = UserRepo::update(
        &pool,
        created.id,
        &UpdateUser {
            username: None,
            email: Some("dave@new.example.com".to_string()),
            first_name: None,
            last_name: Some("Renamed".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Untouched fields survive the COALESCE update.
    assert_eq!(updated.username, "dave");
    assert_eq!(updated.email, "dave@new.example.com");
    assert_eq!(updated.last_name, "Renamed");
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animal_crud(pool: PgPool) {
    let created = AnimalRepo::create(&pool, &new_animal("Rex")).await.unwrap();
    assert!(!created.is_adopted);
    assert_eq!(created.adopter_id, None);

    let updated = AnimalRepo::update(
        &pool,
        created.id,
        &UpdateAnimal {
            name: None,
            species: None,
            breed: Some("labrador".to_string()),
            gender: None,
            age: Some(4),
            description: None,
            adoption_status: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Rex");
    assert_eq!(updated.breed.as_deref(), Some("labrador"));

    assert!(AnimalRepo::delete(&pool, created.id).await.unwrap());
    assert!(AnimalRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adopt_assigns_animal_to_user(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    let adopter = UserRepo::create(&pool, &new_user("erin", "erin@example.com", role_id))
        .await
        .unwrap();
    let animal = AnimalRepo::create(&pool, &new_animal("Whiskers"))
        .await
        .unwrap();

    let adopted = AnimalRepo::adopt(&pool, animal.id, adopter.id)
        .await
        .unwrap()
        .unwrap();
    assert!(adopted.is_adopted);
    assert_eq!(adopted.adopter_id, Some(adopter.id));

    // Missing animal reports as absent rather than erroring.
    assert!(AnimalRepo::adopt(&pool, 999_999, adopter.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Volunteer tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_volunteer_task_crud(pool: PgPool) {
    let created = VolunteerRepo::create(&pool, &new_task("Clean kennels"))
        .await
        .unwrap();

    let updated = VolunteerRepo::update(
        &pool,
        created.id,
        &UpdateVolunteerTask {
            task: Some("Clean kennels and yard".to_string()),
            start_time: None,
            end_time: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.task, "Clean kennels and yard");
    assert_eq!(updated.start_time, created.start_time);

    assert!(VolunteerRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_volunteer_sign_up_membership(pool: PgPool) {
    let role_id = user_role_id(&pool).await;
    let user = UserRepo::create(&pool, &new_user("frank", "frank@example.com", role_id))
        .await
        .unwrap();
    let task = VolunteerRepo::create(&pool, &new_task("Walk dogs"))
        .await
        .unwrap();
    let other = VolunteerRepo::create(&pool, &new_task("Feed cats"))
        .await
        .unwrap();

    VolunteerRepo::add_user(&pool, task.id, user.id)
        .await
        .unwrap();
    // Joining twice is a no-op, not an error.
    VolunteerRepo::add_user(&pool, task.id, user.id)
        .await
        .unwrap();

    let mine = VolunteerRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, task.id);
    assert_ne!(mine[0].id, other.id);

    assert!(VolunteerRepo::remove_user(&pool, task.id, user.id)
        .await
        .unwrap());
    assert!(VolunteerRepo::list_by_user(&pool, user.id)
        .await
        .unwrap()
        .is_empty());
}
