//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymchain_core::chain::require_active_parent;
use gymchain_core::employee::{
    check_facility_scope, has_dual_compensation, validate_compensation, validate_employee_update,
    validate_employment_dates, validate_new_employee,
};
use gymchain_core::error::CoreError;
use gymchain_core::types::{Date, DbId};
use gymchain_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use gymchain_db::repositories::{EmployeeRepo, GymChainRepo, GymFacilityRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Employee";

/// Request body for `POST /employees/{id}/terminate`.
#[derive(Debug, Deserialize)]
pub struct TerminateRequest {
    pub termination_date: Date,
    /// Also mark the employee inactive. Defaults to `true`.
    pub deactivate: Option<bool>,
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_new_employee(
        &input.first_name,
        &input.last_name,
        &input.email,
        &input.position,
    )?;
    validate_employment_dates(input.hire_date, input.termination_date)?;
    validate_compensation(input.hourly_rate, input.salary)?;

    let chain = GymChainRepo::find_by_id(&state.pool, input.gym_chain_id).await?;
    require_active_parent("GymChain", input.gym_chain_id, chain.map(|c| c.is_active))?;

    if let Some(facility_id) = input.gym_facility_id {
        ensure_facility_in_chain(&state, input.gym_chain_id, facility_id).await?;
    }

    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    warn_on_dual_compensation(&employee);
    tracing::info!(
        employee_id = %employee.id,
        gym_chain_id = %employee.gym_chain_id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = find_employee(&state, id).await?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
///
/// Date ordering and facility scoping are checked against the stored row.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    validate_employee_update(
        input.first_name.as_deref(),
        input.last_name.as_deref(),
        input.email.as_deref(),
        input.position.as_deref(),
    )?;
    validate_compensation(input.hourly_rate, input.salary)?;

    let existing = find_employee(&state, id).await?;
    validate_employment_dates(
        input.hire_date.unwrap_or(existing.hire_date),
        existing.termination_date,
    )?;

    if input.clear_gym_facility && input.gym_facility_id.is_some() {
        return Err(CoreError::Validation(
            "gym_facility_id cannot be set while clear_gym_facility is true".into(),
        )
        .into());
    }
    if let Some(facility_id) = input.gym_facility_id {
        if existing.gym_facility_id != Some(facility_id) {
            ensure_facility_in_chain(&state, existing.gym_chain_id, facility_id).await?;
        }
    }

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    warn_on_dual_compensation(&employee);
    Ok(Json(employee))
}

/// POST /api/v1/employees/{id}/terminate
pub async fn terminate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TerminateRequest>,
) -> AppResult<Json<Employee>> {
    let existing = find_employee(&state, id).await?;
    validate_employment_dates(existing.hire_date, Some(input.termination_date))?;

    let deactivate = input.deactivate.unwrap_or(true);
    let employee = EmployeeRepo::terminate(&state.pool, id, input.termination_date, deactivate)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(
        employee_id = %id,
        termination_date = %input.termination_date,
        deactivate,
        "Employee terminated"
    );
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::hard_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

async fn find_employee(state: &AppState, id: DbId) -> AppResult<Employee> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// The facility must exist, be active, and belong to `gym_chain_id`.
async fn ensure_facility_in_chain(
    state: &AppState,
    gym_chain_id: DbId,
    facility_id: DbId,
) -> AppResult<()> {
    let facility = GymFacilityRepo::find_by_id(&state.pool, facility_id)
        .await?
        .ok_or(AppError::not_found("GymFacility", facility_id))?;
    require_active_parent("GymFacility", facility_id, Some(facility.is_active))?;
    check_facility_scope(gym_chain_id, facility_id, facility.gym_chain_id)?;
    Ok(())
}

fn warn_on_dual_compensation(employee: &Employee) {
    if has_dual_compensation(employee.hourly_rate, employee.salary) {
        tracing::warn!(
            employee_id = %employee.id,
            "Employee has both an hourly rate and a salary"
        );
    }
}
