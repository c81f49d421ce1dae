//! Repository for the `gym_facilities` table.

use gymchain_core::chain::DEFAULT_COUNTRY;
use gymchain_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::gym_facility::{CreateGymFacility, GymFacility, UpdateGymFacility};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, address, city, state, zip_code, country, \
                       phone_number, email, operating_hours, square_footage, max_capacity, \
                       is_active, opening_date, gym_chain_id, created_at, updated_at";

/// Provides CRUD operations for gym facilities.
pub struct GymFacilityRepo;

impl GymFacilityRepo {
    /// Insert a new facility, returning the created row.
    ///
    /// If `country` is `None` in the input, defaults to `"USA"`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGymFacility,
    ) -> Result<GymFacility, sqlx::Error> {
        let query = format!(
            "INSERT INTO gym_facilities
                (id, gym_chain_id, name, address, city, state, zip_code, country, description,
                 phone_number, email, operating_hours, square_footage, max_capacity, opening_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, $9), $10, $11, $12, $13, $14,
                     $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymFacility>(&query)
            .bind(new_id())
            .bind(input.gym_chain_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.country)
            .bind(DEFAULT_COUNTRY)
            .bind(&input.description)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.operating_hours)
            .bind(input.square_footage)
            .bind(input.max_capacity)
            .bind(input.opening_date)
            .fetch_one(pool)
            .await
    }

    /// Find a facility by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GymFacility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gym_facilities WHERE id = $1");
        sqlx::query_as::<_, GymFacility>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the facilities of a chain, ordered by name.
    pub async fn list_by_chain(
        pool: &PgPool,
        gym_chain_id: DbId,
    ) -> Result<Vec<GymFacility>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gym_facilities
             WHERE gym_chain_id = $1
             ORDER BY name, created_at"
        );
        sqlx::query_as::<_, GymFacility>(&query)
            .bind(gym_chain_id)
            .fetch_all(pool)
            .await
    }

    /// Update a facility. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGymFacility,
    ) -> Result<Option<GymFacility>, sqlx::Error> {
        let query = format!(
            "UPDATE gym_facilities SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                zip_code = COALESCE($6, zip_code),
                country = COALESCE($7, country),
                description = COALESCE($8, description),
                phone_number = COALESCE($9, phone_number),
                email = COALESCE($10, email),
                operating_hours = COALESCE($11, operating_hours),
                square_footage = COALESCE($12, square_footage),
                max_capacity = COALESCE($13, max_capacity),
                opening_date = COALESCE($14, opening_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymFacility>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.country)
            .bind(&input.description)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.operating_hours)
            .bind(input.square_footage)
            .bind(input.max_capacity)
            .bind(input.opening_date)
            .fetch_optional(pool)
            .await
    }

    /// Set (or clear, with `None`) the maximum capacity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_capacity(
        pool: &PgPool,
        id: DbId,
        max_capacity: Option<i32>,
    ) -> Result<Option<GymFacility>, sqlx::Error> {
        let query = format!(
            "UPDATE gym_facilities SET max_capacity = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymFacility>(&query)
            .bind(id)
            .bind(max_capacity)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a facility. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE gym_facilities SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a facility. Fails with a foreign-key violation while
    /// amenities or employees still reference it.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gym_facilities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
