//! Employee rules: required fields, employment dates, compensation, and
//! facility scoping within the employing chain.

use crate::error::CoreError;
use crate::types::{Date, DbId, Decimal};
use crate::validation::{
    require_date_order, require_non_negative_opt, require_text, require_text_if_present,
    validate_email,
};

/// Validate the fields required to create an employee.
pub fn validate_new_employee(
    first_name: &str,
    last_name: &str,
    email: &str,
    position: &str,
) -> Result<(), CoreError> {
    require_text(first_name, "first_name")?;
    require_text(last_name, "last_name")?;
    validate_email(email, "email")?;
    require_text(position, "position")
}

/// Validate a partial employee update.
pub fn validate_employee_update(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
    position: Option<&str>,
) -> Result<(), CoreError> {
    require_text_if_present(first_name, "first_name")?;
    require_text_if_present(last_name, "last_name")?;
    if let Some(email) = email {
        validate_email(email, "email")?;
    }
    require_text_if_present(position, "position")
}

/// A termination date, when set, must fall on or after the hire date.
pub fn validate_employment_dates(
    hire_date: Date,
    termination_date: Option<Date>,
) -> Result<(), CoreError> {
    match termination_date {
        Some(termination) => {
            require_date_order(hire_date, termination, "hire_date", "termination_date")
        }
        None => Ok(()),
    }
}

/// Rates, when present, must be non-negative.
pub fn validate_compensation(
    hourly_rate: Option<Decimal>,
    salary: Option<Decimal>,
) -> Result<(), CoreError> {
    require_non_negative_opt(hourly_rate, "hourly_rate")?;
    require_non_negative_opt(salary, "salary")
}

/// Both an hourly rate and a salary are set.
///
/// Only one is expected to be meaningful, but the combination is accepted;
/// callers log it for review.
pub fn has_dual_compensation(hourly_rate: Option<Decimal>, salary: Option<Decimal>) -> bool {
    hourly_rate.is_some() && salary.is_some()
}

/// A facility-scoped employee must work at a facility of their own chain.
pub fn check_facility_scope(
    employee_chain_id: DbId,
    facility_id: DbId,
    facility_chain_id: DbId,
) -> Result<(), CoreError> {
    if employee_chain_id != facility_chain_id {
        return Err(CoreError::CrossChainFacility {
            facility_id,
            gym_chain_id: employee_chain_id,
        });
    }
    Ok(())
}
