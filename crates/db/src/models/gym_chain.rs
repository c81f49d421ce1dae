//! Gym chain entity model and DTOs.

use gymchain_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gym chain row from the `gym_chains` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GymChain {
    pub id: DbId,
    pub business_name: String,
    pub business_description: Option<String>,
    pub business_license: Option<String>,
    pub tax_id: Option<String>,
    pub business_email: String,
    pub business_phone: Option<String>,
    pub website: Option<String>,
    pub headquarters_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
    pub established_date: Option<Date>,
    pub manager_profile_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gym chain.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGymChain {
    pub manager_profile_id: DbId,
    pub business_name: String,
    pub business_email: String,
    pub business_description: Option<String>,
    pub business_license: Option<String>,
    pub tax_id: Option<String>,
    pub business_phone: Option<String>,
    pub website: Option<String>,
    pub headquarters_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    /// Defaults to `"USA"` if omitted.
    pub country: Option<String>,
    pub established_date: Option<Date>,
}

/// DTO for updating an existing gym chain. All fields are optional.
///
/// The owning manager is changed through the dedicated reassign operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGymChain {
    pub business_name: Option<String>,
    pub business_email: Option<String>,
    pub business_description: Option<String>,
    pub business_license: Option<String>,
    pub tax_id: Option<String>,
    pub business_phone: Option<String>,
    pub website: Option<String>,
    pub headquarters_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub established_date: Option<Date>,
}
