//! Repository for the `volunteer_tasks` table and its sign-up join table.

use sqlx::PgPool;

use sanctuary_core::types::DbId;

use crate::models::volunteer::{CreateVolunteerTask, UpdateVolunteerTask, VolunteerTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task, start_time, end_time, created_at, updated_at";

/// Provides CRUD and membership operations for volunteer tasks.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Insert a new volunteer task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVolunteerTask,
    ) -> Result<VolunteerTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteer_tasks (task, start_time, end_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VolunteerTask>(&query)
            .bind(&input.task)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find a volunteer task by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VolunteerTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteer_tasks WHERE id = $1");
        sqlx::query_as::<_, VolunteerTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all volunteer tasks, earliest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<VolunteerTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteer_tasks ORDER BY start_time ASC");
        sqlx::query_as::<_, VolunteerTask>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the tasks a user has signed up for, earliest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VolunteerTask>, sqlx::Error> {
        let query = format!(
            "SELECT vt.id, vt.task, vt.start_time, vt.end_time, vt.created_at, vt.updated_at
             FROM volunteer_tasks vt
             JOIN volunteer_task_users vtu ON vtu.task_id = vt.id
             WHERE vtu.user_id = $1
             ORDER BY vt.start_time ASC"
        );
        sqlx::query_as::<_, VolunteerTask>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a volunteer task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVolunteerTask,
    ) -> Result<Option<VolunteerTask>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteer_tasks SET
                task = COALESCE($2, task),
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VolunteerTask>(&query)
            .bind(id)
            .bind(&input.task)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// Sign a user up for a task. Signing up twice is a no-op.
    pub async fn add_user(pool: &PgPool, task_id: DbId, user_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO volunteer_task_users (task_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a user from a task. Returns `true` if a membership was removed.
    pub async fn remove_user(
        pool: &PgPool,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM volunteer_task_users WHERE task_id = $1 AND user_id = $2")
                .bind(task_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a volunteer task by ID. Returns `true` if a row was removed.
    ///
    /// Memberships go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM volunteer_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
