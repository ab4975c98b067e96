//! Floor routes, including building composition and the layout view.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{composition, floor, floor_layout};
use crate::state::AppState;

/// ```text
/// POST   /create-floor                                  -> create_building_with_floors
/// GET    /fetch-floors-with-personnels/{building_id}    -> fetch_floors_with_personnels
/// GET    /fetch-floor/{floor_id}                        -> get_by_id
/// GET    /fetch-floors                                  -> list
/// POST   /add-floor                                     -> add
/// PUT    /update-floor/{floor_id}                       -> update
/// DELETE /delete-floor/{floor_id}                       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/create-floor",
            post(composition::create_building_with_floors),
        )
        .route(
            "/fetch-floors-with-personnels/{building_id}",
            get(floor_layout::fetch_floors_with_personnels),
        )
        .route("/fetch-floor/{floor_id}", get(floor::get_by_id))
        .route("/fetch-floors", get(floor::list))
        .route("/add-floor", post(floor::add))
        .route("/update-floor/{floor_id}", put(floor::update))
        .route("/delete-floor/{floor_id}", delete(floor::delete))
}
