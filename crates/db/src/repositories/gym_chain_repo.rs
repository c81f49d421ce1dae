//! Repository for the `gym_chains` table.

use gymchain_core::chain::DEFAULT_COUNTRY;
use gymchain_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::gym_chain::{CreateGymChain, GymChain, UpdateGymChain};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, business_name, business_description, business_license, tax_id, \
                       business_email, business_phone, website, headquarters_address, city, \
                       state, zip_code, country, is_active, established_date, \
                       manager_profile_id, created_at, updated_at";

/// Provides CRUD operations for gym chains.
pub struct GymChainRepo;

impl GymChainRepo {
    /// Insert a new chain, returning the created row.
    ///
    /// If `country` is `None` in the input, defaults to `"USA"`.
    pub async fn create(pool: &PgPool, input: &CreateGymChain) -> Result<GymChain, sqlx::Error> {
        let query = format!(
            "INSERT INTO gym_chains
                (id, manager_profile_id, business_name, business_email, business_description,
                 business_license, tax_id, business_phone, website, headquarters_address,
                 city, state, zip_code, country, established_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                     COALESCE($14, $15), $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymChain>(&query)
            .bind(new_id())
            .bind(input.manager_profile_id)
            .bind(&input.business_name)
            .bind(&input.business_email)
            .bind(&input.business_description)
            .bind(&input.business_license)
            .bind(&input.tax_id)
            .bind(&input.business_phone)
            .bind(&input.website)
            .bind(&input.headquarters_address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.country)
            .bind(DEFAULT_COUNTRY)
            .bind(input.established_date)
            .fetch_one(pool)
            .await
    }

    /// Find a chain by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GymChain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gym_chains WHERE id = $1");
        sqlx::query_as::<_, GymChain>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all chains ordered by business name.
    pub async fn list(pool: &PgPool) -> Result<Vec<GymChain>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gym_chains ORDER BY business_name, created_at");
        sqlx::query_as::<_, GymChain>(&query).fetch_all(pool).await
    }

    /// List the chains owned by a manager, ordered by business name.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_profile_id: DbId,
    ) -> Result<Vec<GymChain>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gym_chains
             WHERE manager_profile_id = $1
             ORDER BY business_name, created_at"
        );
        sqlx::query_as::<_, GymChain>(&query)
            .bind(manager_profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a chain. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGymChain,
    ) -> Result<Option<GymChain>, sqlx::Error> {
        let query = format!(
            "UPDATE gym_chains SET
                business_name = COALESCE($2, business_name),
                business_email = COALESCE($3, business_email),
                business_description = COALESCE($4, business_description),
                business_license = COALESCE($5, business_license),
                tax_id = COALESCE($6, tax_id),
                business_phone = COALESCE($7, business_phone),
                website = COALESCE($8, website),
                headquarters_address = COALESCE($9, headquarters_address),
                city = COALESCE($10, city),
                state = COALESCE($11, state),
                zip_code = COALESCE($12, zip_code),
                country = COALESCE($13, country),
                established_date = COALESCE($14, established_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymChain>(&query)
            .bind(id)
            .bind(&input.business_name)
            .bind(&input.business_email)
            .bind(&input.business_description)
            .bind(&input.business_license)
            .bind(&input.tax_id)
            .bind(&input.business_phone)
            .bind(&input.website)
            .bind(&input.headquarters_address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.country)
            .bind(input.established_date)
            .fetch_optional(pool)
            .await
    }

    /// Point the chain at a different owning manager.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn reassign_manager(
        pool: &PgPool,
        id: DbId,
        manager_profile_id: DbId,
    ) -> Result<Option<GymChain>, sqlx::Error> {
        let query = format!(
            "UPDATE gym_chains SET manager_profile_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GymChain>(&query)
            .bind(id)
            .bind(manager_profile_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a chain. Facilities and employees are left untouched.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE gym_chains SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a chain. Fails with a foreign-key violation while
    /// facilities or employees still reference it.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gym_chains WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
