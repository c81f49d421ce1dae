pub mod amenities;
pub mod employees;
pub mod facilities;
pub mod gym_chains;
pub mod health;
pub mod managers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /managers                                        profiles, tokens, login
/// /managers/{id}/gym-chains                        chains owned by a manager
///
/// /gym-chains                                      chain CRUD, manager reassignment
/// /gym-chains/{id}/facilities                      facilities of a chain
/// /gym-chains/{id}/employees                       employees of a chain
///
/// /facilities                                      facility CRUD, capacity
/// /facilities/{id}/amenities                       amenities of a facility
/// /facilities/{id}/employees                       employees of a facility
///
/// /amenities                                       amenity CRUD, availability toggle
/// /employees                                       employee CRUD, termination
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/managers", managers::router())
        .nest("/gym-chains", gym_chains::router())
        .nest("/facilities", facilities::router())
        .nest("/amenities", amenities::router())
        .nest("/employees", employees::router())
}
