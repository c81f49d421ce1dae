//! Employee entity model and DTOs.

use gymchain_core::types::{Date, DbId, Decimal, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: String,
    pub department: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub salary: Option<Decimal>,
    pub hire_date: Date,
    pub termination_date: Option<Date>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub gym_chain_id: DbId,
    /// `None` for chain-level staff.
    pub gym_facility_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    pub gym_chain_id: DbId,
    pub gym_facility_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub hire_date: Date,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub salary: Option<Decimal>,
    pub termination_date: Option<Date>,
    pub notes: Option<String>,
}

/// DTO for updating an existing employee. All fields are optional.
///
/// The employing chain is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub gym_facility_id: Option<DbId>,
    /// Move the employee back to chain-level staff. Takes precedence over
    /// `gym_facility_id`.
    #[serde(default)]
    pub clear_gym_facility: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub salary: Option<Decimal>,
    pub hire_date: Option<Date>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}
