//! Route definitions for the `/facilities` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::facility;
use crate::state::AppState;

/// Routes mounted at `/facilities`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> deactivate
/// PUT    /{id}/capacity     -> update_capacity
/// GET    /{id}/amenities    -> list_amenities
/// GET    /{id}/employees    -> list_employees
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(facility::create))
        .route(
            "/{id}",
            get(facility::get_by_id)
                .put(facility::update)
                .delete(facility::deactivate),
        )
        .route("/{id}/capacity", put(facility::update_capacity))
        .route("/{id}/amenities", get(facility::list_amenities))
        .route("/{id}/employees", get(facility::list_employees))
}
