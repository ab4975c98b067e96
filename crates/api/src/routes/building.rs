//! Building routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::building;
use crate::state::AppState;

/// ```text
/// GET    /fetch-building/{building_id}   -> get_by_id
/// GET    /fetch-buildings                -> list
/// POST   /create-building                -> create
/// PUT    /update-building/{building_id}  -> update
/// DELETE /delete-building/{building_id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetch-building/{building_id}", get(building::get_by_id))
        .route("/fetch-buildings", get(building::list))
        .route("/create-building", post(building::create))
        .route("/update-building/{building_id}", put(building::update))
        .route("/delete-building/{building_id}", delete(building::delete))
}
