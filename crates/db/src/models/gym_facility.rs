//! Gym facility entity model and DTOs.

use gymchain_core::types::{Date, DbId, Decimal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A facility row from the `gym_facilities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GymFacility {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Free-form schedule, e.g. `"Mon-Fri 05:00-23:00"`.
    pub operating_hours: Option<String>,
    pub square_footage: Option<Decimal>,
    pub max_capacity: Option<i32>,
    pub is_active: bool,
    pub opening_date: Option<Date>,
    pub gym_chain_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new facility.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGymFacility {
    pub gym_chain_id: DbId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Defaults to `"USA"` if omitted.
    pub country: Option<String>,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<String>,
    pub square_footage: Option<Decimal>,
    pub max_capacity: Option<i32>,
    pub opening_date: Option<Date>,
}

/// DTO for updating an existing facility. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGymFacility {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<String>,
    pub square_footage: Option<Decimal>,
    pub max_capacity: Option<i32>,
    pub opening_date: Option<Date>,
}
