//! Handlers for the `/gym-chains` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymchain_core::chain::{require_active_parent, validate_chain_update, validate_new_chain};
use gymchain_core::types::DbId;
use gymchain_db::models::employee::Employee;
use gymchain_db::models::gym_chain::{CreateGymChain, GymChain, UpdateGymChain};
use gymchain_db::models::gym_facility::GymFacility;
use gymchain_db::repositories::{
    EmployeeRepo, GymChainRepo, GymFacilityRepo, ManagerProfileRepo,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "GymChain";

/// Request body for `PUT /gym-chains/{id}/manager`.
#[derive(Debug, Deserialize)]
pub struct ReassignManagerRequest {
    pub manager_profile_id: DbId,
}

/// POST /api/v1/gym-chains
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGymChain>,
) -> AppResult<(StatusCode, Json<GymChain>)> {
    validate_new_chain(&input.business_name, &input.business_email)?;
    ensure_active_manager(&state, input.manager_profile_id).await?;

    let chain = GymChainRepo::create(&state.pool, &input).await?;
    tracing::info!(
        gym_chain_id = %chain.id,
        manager_id = %chain.manager_profile_id,
        "Gym chain created"
    );
    Ok((StatusCode::CREATED, Json(chain)))
}

/// GET /api/v1/gym-chains
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GymChain>>> {
    let chains = GymChainRepo::list(&state.pool).await?;
    Ok(Json(chains))
}

/// GET /api/v1/gym-chains/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GymChain>> {
    let chain = find_chain(&state, id).await?;
    Ok(Json(chain))
}

/// PUT /api/v1/gym-chains/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGymChain>,
) -> AppResult<Json<GymChain>> {
    validate_chain_update(
        input.business_name.as_deref(),
        input.business_email.as_deref(),
    )?;
    let chain = GymChainRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(chain))
}

/// PUT /api/v1/gym-chains/{id}/manager
///
/// Transfers ownership to another active manager profile.
pub async fn reassign_manager(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReassignManagerRequest>,
) -> AppResult<Json<GymChain>> {
    ensure_active_manager(&state, input.manager_profile_id).await?;
    let chain = GymChainRepo::reassign_manager(&state.pool, id, input.manager_profile_id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(
        gym_chain_id = %id,
        manager_id = %input.manager_profile_id,
        "Gym chain reassigned"
    );
    Ok(Json(chain))
}

/// DELETE /api/v1/gym-chains/{id}
///
/// Soft-deactivates the chain. Facilities and employees keep their state.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = GymChainRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        tracing::info!(gym_chain_id = %id, "Gym chain deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// GET /api/v1/gym-chains/{id}/facilities
pub async fn list_facilities(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<GymFacility>>> {
    find_chain(&state, id).await?;
    let facilities = GymFacilityRepo::list_by_chain(&state.pool, id).await?;
    Ok(Json(facilities))
}

/// GET /api/v1/gym-chains/{id}/employees
pub async fn list_employees(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Employee>>> {
    find_chain(&state, id).await?;
    let employees = EmployeeRepo::list_by_chain(&state.pool, id).await?;
    Ok(Json(employees))
}

async fn find_chain(state: &AppState, id: DbId) -> AppResult<GymChain> {
    GymChainRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

async fn ensure_active_manager(state: &AppState, manager_id: DbId) -> AppResult<()> {
    let manager = ManagerProfileRepo::find_by_id(&state.pool, manager_id).await?;
    require_active_parent(
        "ManagerProfile",
        manager_id,
        manager.map(|m| m.is_active),
    )?;
    Ok(())
}
