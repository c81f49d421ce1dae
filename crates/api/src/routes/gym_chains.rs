//! Route definitions for the `/gym-chains` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gym_chain;
use crate::state::AppState;

/// Routes mounted at `/gym-chains`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> deactivate
/// PUT    /{id}/manager      -> reassign_manager
/// GET    /{id}/facilities   -> list_facilities
/// GET    /{id}/employees    -> list_employees
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gym_chain::list).post(gym_chain::create))
        .route(
            "/{id}",
            get(gym_chain::get_by_id)
                .put(gym_chain::update)
                .delete(gym_chain::deactivate),
        )
        .route("/{id}/manager", put(gym_chain::reassign_manager))
        .route("/{id}/facilities", get(gym_chain::list_facilities))
        .route("/{id}/employees", get(gym_chain::list_employees))
}
