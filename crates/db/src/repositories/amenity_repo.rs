//! Repository for the `amenities` table.

use gymchain_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category, is_available, cost, \
                       maintenance_schedule, gym_facility_id, created_at, updated_at";

/// Provides CRUD operations for amenities.
pub struct AmenityRepo;

impl AmenityRepo {
    /// Insert a new amenity, returning the created row.
    ///
    /// If `is_available` is `None` in the input, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities
                (id, gym_facility_id, name, category, description, is_available, cost,
                 maintenance_schedule)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(new_id())
            .bind(input.gym_facility_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.is_available)
            .bind(input.cost)
            .bind(&input.maintenance_schedule)
            .fetch_one(pool)
            .await
    }

    /// Find an amenity by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amenities WHERE id = $1");
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the amenities of a facility, grouped by category then name.
    pub async fn list_by_facility(
        pool: &PgPool,
        gym_facility_id: DbId,
    ) -> Result<Vec<Amenity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM amenities
             WHERE gym_facility_id = $1
             ORDER BY category, name"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(gym_facility_id)
            .fetch_all(pool)
            .await
    }

    /// Update an amenity. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                is_available = COALESCE($5, is_available),
                cost = COALESCE($6, cost),
                maintenance_schedule = COALESCE($7, maintenance_schedule)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.is_available)
            .bind(input.cost)
            .bind(&input.maintenance_schedule)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_available`, returning the updated row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_availability(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET is_available = NOT is_available
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an amenity. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
