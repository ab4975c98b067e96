//! Handlers for objects placed on floor cells.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::placement;
use floorplan_core::types::DbId;
use floorplan_db::models::placed_object::{CreatePlacedObject, PlacedObject, UpdatePlacedObject};
use floorplan_db::repositories::PlacedObjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /fetch-object/{object_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacedObject>> {
    let object = PlacedObjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Object", id))?;
    Ok(Json(object))
}

/// GET /fetch-objects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PlacedObject>>> {
    let objects = PlacedObjectRepo::list(&state.pool).await?;
    Ok(Json(objects))
}

/// POST /create-object
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlacedObject>,
) -> AppResult<(StatusCode, Json<PlacedObject>)> {
    placement::validate_seat(input.x_coor, input.y_coor)?;
    let object = PlacedObjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(object)))
}

/// PUT /update-object/{object_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePlacedObject>,
) -> AppResult<Json<PlacedObject>> {
    // Each coordinate is checked on its own; an absent one keeps its stored value.
    placement::validate_seat(input.x_coor.unwrap_or(0), input.y_coor.unwrap_or(0))?;
    let object = PlacedObjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Object", id))?;
    Ok(Json(object))
}

/// DELETE /delete-object/{object_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacedObject>> {
    let object = PlacedObjectRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Object", id))?;
    Ok(Json(object))
}
