//! Route definitions for the `/managers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::manager;
use crate::state::AppState;

/// Routes mounted at `/managers`.
///
/// ```text
/// GET    /                          -> list (?active=)
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> deactivate
/// GET    /{id}/gym-chains           -> list_gym_chains
/// POST   /{id}/email-verification   -> issue_email_verification
/// POST   /{id}/login                -> record_login
/// POST   /verify-email              -> verify_email
/// POST   /password-reset            -> request_password_reset
/// POST   /reset-password            -> reset_password
/// POST   /login                     -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(manager::list).post(manager::create))
        .route("/verify-email", post(manager::verify_email))
        .route("/password-reset", post(manager::request_password_reset))
        .route("/reset-password", post(manager::reset_password))
        .route("/login", post(manager::login))
        .route(
            "/{id}",
            get(manager::get_by_id)
                .put(manager::update)
                .delete(manager::deactivate),
        )
        .route("/{id}/gym-chains", get(manager::list_gym_chains))
        .route(
            "/{id}/email-verification",
            post(manager::issue_email_verification),
        )
        .route("/{id}/login", post(manager::record_login))
}
