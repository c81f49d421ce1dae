//! Route definitions for the `/amenities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::amenity;
use crate::state::AppState;

/// Routes mounted at `/amenities`.
///
/// ```text
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete (hard)
/// POST   /{id}/toggle-availability    -> toggle_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(amenity::create))
        .route(
            "/{id}",
            get(amenity::get_by_id)
                .put(amenity::update)
                .delete(amenity::delete),
        )
        .route(
            "/{id}/toggle-availability",
            post(amenity::toggle_availability),
        )
}
