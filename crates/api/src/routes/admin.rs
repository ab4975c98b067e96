//! Administrator routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET    /fetch-admin/{admin_id}   -> get_by_id
/// GET    /fetch-admins             -> list
/// POST   /create-admin             -> create
/// PUT    /update-admin/{admin_id}  -> update
/// DELETE /delete-admin/{admin_id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetch-admin/{admin_id}", get(admin::get_by_id))
        .route("/fetch-admins", get(admin::list))
        .route("/create-admin", post(admin::create))
        .route("/update-admin/{admin_id}", put(admin::update))
        .route("/delete-admin/{admin_id}", delete(admin::delete))
}
