//! Repository for the `animals` table.

use sqlx::PgPool;

use sanctuary_core::types::DbId;

use crate::models::animal::{Animal, CreateAnimal, UpdateAnimal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, species, breed, gender, age, description, \
                        adoption_status, is_adopted, adopter_id, created_at, updated_at";

/// Provides CRUD and adoption operations for animals.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAnimal) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals (name, species, breed, gender, age, description, adoption_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.description)
            .bind(&input.adoption_status)
            .fetch_one(pool)
            .await
    }

    /// Find an animal by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all animals ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals ORDER BY name ASC");
        sqlx::query_as::<_, Animal>(&query).fetch_all(pool).await
    }

    /// Update an animal. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Adoption state
    /// is owned by [`AnimalRepo::adopt`] and is never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnimal,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET
                name = COALESCE($2, name),
                species = COALESCE($3, species),
                breed = COALESCE($4, breed),
                gender = COALESCE($5, gender),
                age = COALESCE($6, age),
                description = COALESCE($7, description),
                adoption_status = COALESCE($8, adoption_status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.description)
            .bind(&input.adoption_status)
            .fetch_optional(pool)
            .await
    }

    /// Record an adoption: mark the animal adopted and set the adopter.
    ///
    /// Unconditional overwrite (a later adopter replaces an earlier one,
    /// matching the source system). Returns the updated row, or `None` if
    /// the animal does not exist.
    pub async fn adopt(
        pool: &PgPool,
        animal_id: DbId,
        adopter_id: DbId,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET is_adopted = true, adopter_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(animal_id)
            .bind(adopter_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an animal by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
