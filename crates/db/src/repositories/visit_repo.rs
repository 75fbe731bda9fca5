//! Repository for the `visits` table.
//!
//! Booking and cancellation are single conditional UPDATE statements, so the
//! availability flag and the assigned user always change together and a slot
//! can be claimed by at most one caller under concurrent contention.

use sqlx::PgPool;

use sanctuary_core::types::DbId;

use crate::models::visit::{CreateVisit, UpdateVisit, Visit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, start_time, end_time, user_id, available, created_at, updated_at";

/// Provides CRUD and booking operations for visit slots.
pub struct VisitRepo;

impl VisitRepo {
    /// Insert a new visit slot, returning the created row.
    ///
    /// New slots start available with no assigned user. Overlapping time
    /// windows are not checked.
    pub async fn create(pool: &PgPool, input: &CreateVisit) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits (start_time, end_time)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find a visit by ID regardless of availability.
    ///
    /// This is the lookup detail views use; a booked slot stays visible to
    /// the user who holds it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visits WHERE id = $1");
        sqlx::query_as::<_, Visit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a visit by ID only if it is still available.
    ///
    /// Booked slots are invisible through this accessor; callers that need
    /// the row regardless use [`VisitRepo::find_by_id`].
    pub async fn find_available_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visits WHERE id = $1 AND available = true");
        sqlx::query_as::<_, Visit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all currently available visits, oldest slot first.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Visit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM visits WHERE available = true ORDER BY start_time ASC");
        sqlx::query_as::<_, Visit>(&query).fetch_all(pool).await
    }

    /// List every visit, booked or not, oldest slot first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visits ORDER BY start_time ASC");
        sqlx::query_as::<_, Visit>(&query).fetch_all(pool).await
    }

    /// List the visits currently booked by a user, oldest slot first.
    pub async fn list_booked_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Visit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM visits WHERE user_id = $1 ORDER BY start_time ASC");
        sqlx::query_as::<_, Visit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Atomically claim an available slot for a user.
    ///
    /// The WHERE clause is the compare-and-set: only a row that is still
    /// available is written, so of N concurrent callers exactly one observes
    /// `true`. Returns `false` when the slot is missing or already booked;
    /// the caller disambiguates with [`VisitRepo::find_by_id`].
    pub async fn book(pool: &PgPool, visit_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE visits SET user_id = $2, available = false
             WHERE id = $1 AND available = true",
        )
        .bind(visit_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Release a slot: clear the assigned user and mark it available again.
    ///
    /// Unconditional overwrite, so cancelling an already-available slot
    /// simply re-asserts the same state. Returns `false` if no row exists.
    pub async fn cancel(pool: &PgPool, visit_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE visits SET user_id = NULL, available = true WHERE id = $1")
            .bind(visit_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Reschedule a visit: overwrite the time window only.
    ///
    /// Availability and the assigned user are never touched here. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update_times(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVisit,
    ) -> Result<Option<Visit>, sqlx::Error> {
        let query = format!(
            "UPDATE visits SET start_time = $2, end_time = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(id)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a visit by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM visits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
