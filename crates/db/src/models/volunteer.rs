//! Volunteer task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sanctuary_core::types::{DbId, Timestamp};

/// A volunteer task row from the `volunteer_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VolunteerTask {
    pub id: DbId,
    pub task: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new volunteer task.
#[derive(Debug, Deserialize)]
pub struct CreateVolunteerTask {
    pub task: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// DTO for updating an existing volunteer task. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateVolunteerTask {
    pub task: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
}
