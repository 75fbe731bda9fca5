//! Animal entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sanctuary_core::types::{DbId, Timestamp};

/// An animal row from the `animals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub adoption_status: Option<String>,
    pub is_adopted: bool,
    pub adopter_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new animal.
#[derive(Debug, Deserialize)]
pub struct CreateAnimal {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub adoption_status: Option<String>,
}

/// DTO for updating an existing animal. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAnimal {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
    pub adoption_status: Option<String>,
}
