//! Handlers for the `/managers` resource, including the email-verification
//! and password-reset token flows.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymchain_core::error::CoreError;
use gymchain_core::manager::{
    normalize_email, validate_new_profile, validate_password_strength, validate_profile_update,
};
use gymchain_core::tokens::{check_token, hash_token, issue_token, IssuedToken};
use gymchain_core::types::{DbId, Timestamp};
use gymchain_db::models::gym_chain::GymChain;
use gymchain_db::models::manager_profile::{
    CreateManagerProfile, ManagerProfile, ManagerProfileResponse, UpdateManagerProfile,
};
use gymchain_db::repositories::{GymChainRepo, ManagerProfileRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "ManagerProfile";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /managers`.
#[derive(Debug, Deserialize)]
pub struct CreateManagerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

/// Query parameters for `GET /managers`.
#[derive(Debug, Deserialize)]
pub struct ListManagersParams {
    pub active: Option<bool>,
}

/// A freshly issued single-use token.
///
/// The plaintext is only ever returned here; the database keeps its digest.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: Timestamp,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.plaintext,
            expires_at: issued.expires_at,
        }
    }
}

/// Response body for `POST /managers`.
#[derive(Debug, Serialize)]
pub struct CreatedManagerResponse {
    pub profile: ManagerProfileResponse,
    pub email_verification: TokenResponse,
}

/// Request body for `POST /managers/verify-email`.
#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

/// Request body for `POST /managers/password-reset`.
#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Request body for `POST /managers/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Request body for `POST /managers/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/managers
///
/// Creates an unverified profile and issues its first verification token.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateManagerRequest>,
) -> AppResult<(StatusCode, Json<CreatedManagerResponse>)> {
    validate_new_profile(&input.first_name, &input.last_name, &input.email)?;
    validate_password_strength(&input.password, state.config.account.password_min_length)?;

    let email = normalize_email(&input.email);
    ensure_email_available(&state, &email, None).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateManagerProfile {
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email,
        password_hash,
        phone_number: input.phone_number,
    };
    let issued = issue_token(Utc::now(), state.config.account.email_verification_ttl);
    let profile = ManagerProfileRepo::create_with_verification_token(
        &state.pool,
        &create,
        &issued.hash,
        issued.expires_at,
    )
    .await?;

    tracing::info!(manager_id = %profile.id, "Manager profile created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedManagerResponse {
            profile: profile.into(),
            email_verification: issued.into(),
        }),
    ))
}

/// GET /api/v1/managers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListManagersParams>,
) -> AppResult<Json<Vec<ManagerProfileResponse>>> {
    let profiles = ManagerProfileRepo::list(&state.pool, params.active).await?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/managers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ManagerProfileResponse>> {
    let profile = find_profile(&state, id).await?;
    Ok(Json(profile.into()))
}

/// PUT /api/v1/managers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateManagerProfile>,
) -> AppResult<Json<ManagerProfileResponse>> {
    validate_profile_update(
        input.first_name.as_deref(),
        input.last_name.as_deref(),
        input.email.as_deref(),
    )?;

    if let Some(email) = input.email.as_deref() {
        let email = normalize_email(email);
        ensure_email_available(&state, &email, Some(id)).await?;
        input.email = Some(email);
    }

    let profile = ManagerProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(profile.into()))
}

/// DELETE /api/v1/managers/{id}
///
/// Soft-deactivates the profile. Owned gym chains are not touched.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = ManagerProfileRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        tracing::info!(manager_id = %id, "Manager profile deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(ENTITY, id))
    }
}

/// GET /api/v1/managers/{id}/gym-chains
pub async fn list_gym_chains(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<GymChain>>> {
    find_profile(&state, id).await?;
    let chains = GymChainRepo::list_by_manager(&state.pool, id).await?;
    Ok(Json(chains))
}

/// POST /api/v1/managers/{id}/email-verification
///
/// Rotates the verification token. Any previously issued token stops working.
pub async fn issue_email_verification(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TokenResponse>> {
    let issued = issue_token(Utc::now(), state.config.account.email_verification_ttl);
    let stored = ManagerProfileRepo::set_email_verification_token(
        &state.pool,
        id,
        &issued.hash,
        issued.expires_at,
    )
    .await?;
    if !stored {
        return Err(AppError::not_found(ENTITY, id));
    }
    Ok(Json(issued.into()))
}

/// POST /api/v1/managers/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    Json(input): Json<VerifyEmailRequest>,
) -> AppResult<Json<ManagerProfileResponse>> {
    let token_hash = hash_token(&input.token);
    let profile = ManagerProfileRepo::find_by_email_verification_token(&state.pool, &token_hash)
        .await?
        .ok_or(CoreError::TokenInvalid)?;

    check_token(
        profile.email_verification_token_hash.as_deref(),
        profile.email_verification_token_expires,
        &input.token,
        Utc::now(),
    )?;

    let consumed =
        ManagerProfileRepo::consume_email_verification_token(&state.pool, profile.id, &token_hash)
            .await?;
    if !consumed {
        return Err(CoreError::TokenInvalid.into());
    }

    tracing::info!(manager_id = %profile.id, "Manager email verified");

    let profile = find_profile(&state, profile.id).await?;
    Ok(Json(profile.into()))
}

/// POST /api/v1/managers/password-reset
///
/// Issues a reset token for the active profile registered under `email`.
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(input): Json<PasswordResetRequest>,
) -> AppResult<Json<TokenResponse>> {
    let email = normalize_email(&input.email);
    let profile = ManagerProfileRepo::find_active_by_email(&state.pool, &email)
        .await?
        .ok_or(CoreError::NotFoundByEmail {
            entity: ENTITY,
            email,
        })?;

    let issued = issue_token(Utc::now(), state.config.account.password_reset_ttl);
    let stored = ManagerProfileRepo::set_password_reset_token(
        &state.pool,
        profile.id,
        &issued.hash,
        issued.expires_at,
    )
    .await?;
    if !stored {
        return Err(AppError::not_found(ENTITY, profile.id));
    }

    tracing::info!(manager_id = %profile.id, "Password reset requested");
    Ok(Json(issued.into()))
}

/// POST /api/v1/managers/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    let token_hash = hash_token(&input.token);
    let profile = ManagerProfileRepo::find_by_password_reset_token(&state.pool, &token_hash)
        .await?
        .ok_or(CoreError::TokenInvalid)?;

    check_token(
        profile.password_reset_token_hash.as_deref(),
        profile.password_reset_token_expires,
        &input.token,
        Utc::now(),
    )?;
    validate_password_strength(&input.new_password, state.config.account.password_min_length)?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let consumed = ManagerProfileRepo::consume_password_reset_token(
        &state.pool,
        profile.id,
        &token_hash,
        &password_hash,
    )
    .await?;
    if !consumed {
        return Err(CoreError::TokenInvalid.into());
    }

    tracing::info!(manager_id = %profile.id, "Password reset completed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/managers/login
///
/// Checks the password of an active profile and records the login time.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ManagerProfileResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let profile = ManagerProfileRepo::find_active_by_email(&state.pool, &normalize_email(&input.email))
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &profile.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(manager_id = %profile.id, "Failed manager login");
        return Err(invalid());
    }

    ManagerProfileRepo::record_login(&state.pool, profile.id).await?;
    let profile = find_profile(&state, profile.id).await?;
    Ok(Json(profile.into()))
}

/// POST /api/v1/managers/{id}/login
///
/// Records a login performed by an external authentication service.
pub async fn record_login(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ManagerProfileResponse>> {
    let recorded = ManagerProfileRepo::record_login(&state.pool, id).await?;
    if !recorded {
        return Err(AppError::not_found(ENTITY, id));
    }
    let profile = find_profile(&state, id).await?;
    Ok(Json(profile.into()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_profile(state: &AppState, id: DbId) -> AppResult<ManagerProfile> {
    ManagerProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// Fail with `Conflict` if another active profile already uses `email`.
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match ManagerProfileRepo::find_active_by_email(&state.pool, email).await? {
        Some(existing) if Some(existing.id) != current_id => Err(AppError::Core(
            CoreError::Conflict(format!("Email {email} is already registered")),
        )),
        _ => Ok(()),
    }
}
