//! Amenity entity model and DTOs.

use gymchain_core::types::{DbId, Decimal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An amenity row from the `amenities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Open enumeration; see `gymchain_core::amenity::KNOWN_CATEGORIES`.
    pub category: String,
    pub is_available: bool,
    /// Cost to maintain or provide this amenity.
    pub cost: Option<Decimal>,
    pub maintenance_schedule: Option<String>,
    pub gym_facility_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new amenity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmenity {
    pub gym_facility_id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_available: Option<bool>,
    pub cost: Option<Decimal>,
    pub maintenance_schedule: Option<String>,
}

/// DTO for updating an existing amenity. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAmenity {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    pub cost: Option<Decimal>,
    pub maintenance_schedule: Option<String>,
}
