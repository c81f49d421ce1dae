//! Handlers for the `/facilities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymchain_core::chain::require_active_parent;
use gymchain_core::facility::{
    validate_capacity, validate_facility_update, validate_new_facility, AddressParts,
};
use gymchain_core::types::DbId;
use gymchain_db::models::amenity::Amenity;
use gymchain_db::models::employee::Employee;
use gymchain_db::models::gym_facility::{CreateGymFacility, GymFacility, UpdateGymFacility};
use gymchain_db::repositories::{AmenityRepo, EmployeeRepo, GymChainRepo, GymFacilityRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "GymFacility";

/// Request body for `PUT /facilities/{id}/capacity`.
///
/// A `null` capacity clears the limit.
#[derive(Debug, Deserialize)]
pub struct CapacityRequest {
    pub max_capacity: Option<i32>,
}

/// POST /api/v1/facilities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGymFacility>,
) -> AppResult<(StatusCode, Json<GymFacility>)> {
    validate_new_facility(
        &input.name,
        AddressParts {
            address: &input.address,
            city: &input.city,
            state: &input.state,
            zip_code: &input.zip_code,
        },
        input.email.as_deref(),
        input.max_capacity,
        input.square_footage,
    )?;

    let chain = GymChainRepo::find_by_id(&state.pool, input.gym_chain_id).await?;
    require_active_parent("GymChain", input.gym_chain_id, chain.map(|c| c.is_active))?;

    let facility = GymFacilityRepo::create(&state.pool, &input).await?;
    tracing::info!(
        facility_id = %facility.id,
        gym_chain_id = %facility.gym_chain_id,
        "Facility created"
    );
    Ok((StatusCode::CREATED, Json(facility)))
}

/// GET /api/v1/facilities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GymFacility>> {
    let facility = find_facility(&state, id).await?;
    Ok(Json(facility))
}

/// PUT /api/v1/facilities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGymFacility>,
) -> AppResult<Json<GymFacility>> {
    validate_facility_update(
        input.name.as_deref(),
        input.address.as_deref(),
        input.city.as_deref(),
        input.state.as_deref(),
        input.zip_code.as_deref(),
        input.max_capacity,
        input.square_footage,
    )?;
    let facility = GymFacilityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(facility))
}

/// PUT /api/v1/facilities/{id}/capacity
pub async fn update_capacity(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CapacityRequest>,
) -> AppResult<Json<GymFacility>> {
    validate_capacity(input.max_capacity)?;
    let facility = GymFacilityRepo::update_capacity(&state.pool, id, input.max_capacity)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(facility))
}

/// DELETE /api/v1/facilities/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = GymFacilityRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        tracing::info!(facility_id = %id, "Facility deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// GET /api/v1/facilities/{id}/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Amenity>>> {
    find_facility(&state, id).await?;
    let amenities = AmenityRepo::list_by_facility(&state.pool, id).await?;
    Ok(Json(amenities))
}

/// GET /api/v1/facilities/{id}/employees
pub async fn list_employees(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Employee>>> {
    find_facility(&state, id).await?;
    let employees = EmployeeRepo::list_by_facility(&state.pool, id).await?;
    Ok(Json(employees))
}

async fn find_facility(state: &AppState, id: DbId) -> AppResult<GymFacility> {
    GymFacilityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}
