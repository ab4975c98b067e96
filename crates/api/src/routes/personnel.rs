//! Personnel routes, including seat placement.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::personnel;
use crate::state::AppState;

/// ```text
/// GET    /fetch-personnel/{personnel_id}                      -> get_by_id
/// GET    /fetch-personnels                                    -> list
/// GET    /fetch-unplaced-users                                -> list_unplaced
/// GET    /fetch-staff-personnel/{floor_id}                    -> list_by_floor
/// POST   /create-personnel                                    -> create
/// PUT    /update-personnel/{personnel_id}                     -> update
/// DELETE /delete-personnel/{personnel_id}                     -> delete
/// POST   /update-personnel-coordinates/                       -> place
/// PUT    /update-personnel-coordinates-null/{personnel_id}    -> unplace
/// ```
///
/// The placement path is served with and without its trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetch-personnel/{personnel_id}", get(personnel::get_by_id))
        .route("/fetch-personnels", get(personnel::list))
        .route("/fetch-unplaced-users", get(personnel::list_unplaced))
        .route(
            "/fetch-staff-personnel/{floor_id}",
            get(personnel::list_by_floor),
        )
        .route("/create-personnel", post(personnel::create))
        .route("/update-personnel/{personnel_id}", put(personnel::update))
        .route("/delete-personnel/{personnel_id}", delete(personnel::delete))
        .route("/update-personnel-coordinates/", post(personnel::place))
        .route("/update-personnel-coordinates", post(personnel::place))
        .route(
            "/update-personnel-coordinates-null/{personnel_id}",
            put(personnel::unplace),
        )
}
