//! Placed object routes. One row per occupied floor cell.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::placed_object;
use crate::state::AppState;

/// ```text
/// GET    /fetch-object/{object_id}   -> get_by_id
/// GET    /fetch-objects              -> list
/// POST   /create-object              -> create
/// PUT    /update-object/{object_id}  -> update
/// DELETE /delete-object/{object_id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetch-object/{object_id}", get(placed_object::get_by_id))
        .route("/fetch-objects", get(placed_object::list))
        .route("/create-object", post(placed_object::create))
        .route("/update-object/{object_id}", put(placed_object::update))
        .route("/delete-object/{object_id}", delete(placed_object::delete))
}
