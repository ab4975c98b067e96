pub mod admin;
pub mod building;
pub mod feedback;
pub mod floor;
pub mod health;
pub mod personnel;
pub mod placed_object;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree. Mounted at the root, next to `/health`.
///
/// Route hierarchy:
///
/// ```text
/// /create-floor                                    building + floors (POST)
/// /fetch-floors-with-personnels/{building_id}      floor layouts (GET)
///
/// /fetch-building/{id}, /fetch-buildings            get, list
/// /create-building                                  create (POST)
/// /update-building/{id}, /delete-building/{id}      update (PUT), delete (DELETE)
///
/// /fetch-floor/{id}, /fetch-floors                  get, list
/// /add-floor                                        append one numbered floor (POST)
/// /update-floor/{id}, /delete-floor/{id}            update (PUT), delete (DELETE)
///
/// /fetch-personnel/{id}, /fetch-personnels          get, list
/// /fetch-unplaced-users                             personnel with no seat
/// /fetch-staff-personnel/{floor_id}                 personnel seated on a floor
/// /create-personnel                                 create (POST)
/// /update-personnel/{id}, /delete-personnel/{id}    update (PUT), delete (DELETE)
/// /update-personnel-coordinates/                    place on a seat (POST)
/// /update-personnel-coordinates-null/{id}           clear seat (PUT)
///
/// /fetch-object/{id}, /fetch-objects                get, list
/// /create-object                                    create (POST)
/// /update-object/{id}, /delete-object/{id}          update (PUT), delete (DELETE)
///
/// /fetch-admin/{id}, /fetch-admins                  get, list
/// /create-admin                                     create (POST)
/// /update-admin/{id}, /delete-admin/{id}            update (PUT), delete (DELETE)
///
/// /fetch-feedback/{id}, /fetch-feedbacks            get, list
/// /create-feedback                                  create (POST)
/// /delete-feedback/{id}                             delete (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(floor::router())
        .merge(building::router())
        .merge(personnel::router())
        .merge(placed_object::router())
        .merge(admin::router())
        .merge(feedback::router())
}
