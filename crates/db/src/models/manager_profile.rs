//! Manager profile entity model and DTOs.

use gymchain_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `manager_profiles` table.
///
/// Contains the password hash and token digests -- NEVER serialize this to
/// API responses directly. Use [`ManagerProfileResponse`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct ManagerProfile {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub email_verified: bool,
    pub email_verification_token_hash: Option<String>,
    pub email_verification_token_expires: Option<Timestamp>,
    pub password_reset_token_hash: Option<String>,
    pub password_reset_token_expires: Option<Timestamp>,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe manager representation for API responses (no secrets).
#[derive(Debug, Clone, Serialize)]
pub struct ManagerProfileResponse {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub email_verified: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ManagerProfile> for ManagerProfileResponse {
    fn from(profile: ManagerProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone_number: profile.phone_number,
            email_verified: profile.email_verified,
            is_active: profile.is_active,
            last_login_at: profile.last_login_at,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// DTO for creating a new manager profile. The password is already hashed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManagerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
}

/// DTO for updating an existing manager profile. All fields are optional.
///
/// Changing the email resets `email_verified`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateManagerProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}
