//! Handlers for the `/amenities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymchain_core::amenity::{is_known_category, validate_amenity_update, validate_new_amenity};
use gymchain_core::chain::require_active_parent;
use gymchain_core::types::DbId;
use gymchain_db::models::amenity::{Amenity, CreateAmenity, UpdateAmenity};
use gymchain_db::repositories::{AmenityRepo, GymFacilityRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Amenity";

/// POST /api/v1/amenities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    validate_new_amenity(&input.name, &input.category, input.cost)?;
    if !is_known_category(&input.category) {
        tracing::debug!(category = %input.category, "Amenity uses a custom category");
    }

    let facility = GymFacilityRepo::find_by_id(&state.pool, input.gym_facility_id).await?;
    require_active_parent(
        "GymFacility",
        input.gym_facility_id,
        facility.map(|f| f.is_active),
    )?;

    let amenity = AmenityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// GET /api/v1/amenities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(amenity))
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAmenity>,
) -> AppResult<Json<Amenity>> {
    validate_amenity_update(input.name.as_deref(), input.category.as_deref(), input.cost)?;
    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(amenity))
}

/// POST /api/v1/amenities/{id}/toggle-availability
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amenity>> {
    let amenity = AmenityRepo::toggle_availability(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(amenity))
}

/// DELETE /api/v1/amenities/{id}
///
/// Amenities have no dependents, so this is a hard delete.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AmenityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}
