//! Repository for the `manager_profiles` table.

use gymchain_core::types::{new_id, DbId, Timestamp};
use sqlx::PgPool;

use crate::models::manager_profile::{CreateManagerProfile, ManagerProfile, UpdateManagerProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, password_hash, phone_number, \
                       email_verified, email_verification_token_hash, \
                       email_verification_token_expires, password_reset_token_hash, \
                       password_reset_token_expires, is_active, last_login_at, \
                       created_at, updated_at";

/// Provides CRUD and token lifecycle operations for manager profiles.
pub struct ManagerProfileRepo;

impl ManagerProfileRepo {
    /// Insert a new profile, returning the created row.
    ///
    /// New profiles start active and unverified.
    pub async fn create(
        pool: &PgPool,
        input: &CreateManagerProfile,
    ) -> Result<ManagerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO manager_profiles (id, first_name, last_name, email, password_hash, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(new_id())
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Insert a new profile together with its first email-verification token
    /// digest in a single statement.
    ///
    /// The profile never exists without a pending verification token.
    pub async fn create_with_verification_token(
        pool: &PgPool,
        input: &CreateManagerProfile,
        token_hash: &str,
        expires: Timestamp,
    ) -> Result<ManagerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO manager_profiles
                (id, first_name, last_name, email, password_hash, phone_number,
                 email_verification_token_hash, email_verification_token_expires)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(new_id())
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone_number)
            .bind(token_hash)
            .bind(expires)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ManagerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM manager_profiles WHERE id = $1");
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active profile holding `email` (case-insensitive).
    pub async fn find_active_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<ManagerProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM manager_profiles WHERE LOWER(email) = LOWER($1) AND is_active"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List profiles ordered by most recently created first.
    ///
    /// When `active` is `Some`, only profiles with that status are returned.
    pub async fn list(
        pool: &PgPool,
        active: Option<bool>,
    ) -> Result<Vec<ManagerProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM manager_profiles
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(active)
            .fetch_all(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// A changed email clears `email_verified`. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateManagerProfile,
    ) -> Result<Option<ManagerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE manager_profiles SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email_verified = CASE
                    WHEN $4::TEXT IS NOT NULL AND LOWER($4) <> LOWER(email) THEN false
                    ELSE email_verified
                END,
                email = COALESCE($4, email),
                phone_number = COALESCE($5, phone_number)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a profile by setting `is_active = false`.
    ///
    /// Owned gym chains are left untouched. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a new email-verification token digest, replacing any previous one.
    ///
    /// Returns `true` if the row was updated.
    pub async fn set_email_verification_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        expires: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET
                email_verification_token_hash = $2,
                email_verification_token_expires = $3
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the active profile holding an email-verification token digest.
    ///
    /// Expiry is not checked here; callers distinguish expired from unknown tokens.
    pub async fn find_by_email_verification_token(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<ManagerProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM manager_profiles
             WHERE email_verification_token_hash = $1 AND is_active"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Mark the email verified and clear the token, provided the token is
    /// still the stored one.
    ///
    /// Returns `false` if the token was already consumed or replaced.
    pub async fn consume_email_verification_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET
                email_verified = true,
                email_verification_token_hash = NULL,
                email_verification_token_expires = NULL
             WHERE id = $1 AND email_verification_token_hash = $2",
        )
        .bind(id)
        .bind(token_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a new password-reset token digest, replacing any previous one.
    ///
    /// Returns `true` if the row was updated.
    pub async fn set_password_reset_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        expires: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET
                password_reset_token_hash = $2,
                password_reset_token_expires = $3
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the active profile holding a password-reset token digest.
    pub async fn find_by_password_reset_token(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<ManagerProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM manager_profiles
             WHERE password_reset_token_hash = $1 AND is_active"
        );
        sqlx::query_as::<_, ManagerProfile>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Replace the password hash and clear the reset token, provided the
    /// token is still the stored one.
    ///
    /// Returns `false` if the token was already consumed or replaced.
    pub async fn consume_password_reset_token(
        pool: &PgPool,
        id: DbId,
        token_hash: &str,
        new_password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET
                password_hash = $3,
                password_reset_token_hash = NULL,
                password_reset_token_expires = NULL
             WHERE id = $1 AND password_reset_token_hash = $2",
        )
        .bind(id)
        .bind(token_hash)
        .bind(new_password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `last_login_at` to now. Returns `true` if an active row was updated.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manager_profiles SET last_login_at = NOW() WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a profile. Fails with a foreign-key violation while
    /// the profile still owns gym chains.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manager_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
