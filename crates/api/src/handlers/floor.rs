//! Handlers for the floor table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::composition::{self, FloorSpec};
use floorplan_core::types::DbId;
use floorplan_db::models::floor::{CreateFloor, Floor, UpdateFloor};
use floorplan_db::repositories::{BuildingRepo, FloorRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /fetch-floor/{floor_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Floor>> {
    let floor = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Floor", id))?;
    Ok(Json(floor))
}

/// GET /fetch-floors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Floor>>> {
    let floors = FloorRepo::list(&state.pool).await?;
    Ok(Json(floors))
}

/// POST /add-floor
///
/// Appends one floor to an existing building, numbered after the current
/// highest floor.
pub async fn add(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFloor>,
) -> AppResult<(StatusCode, Json<Floor>)> {
    BuildingRepo::find_by_id(&state.pool, input.building_id)
        .await?
        .ok_or(AppError::not_found("Building", input.building_id))?;

    let spec = FloorSpec {
        length: input.length,
        width: input.width,
    };
    composition::validate_floor_spec(1, &spec)?;

    let created = composition::append_floors(state.store.as_ref(), input.building_id, &[spec])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("floor insert returned no row".into()))?;

    let floor = FloorRepo::find_by_id(&state.pool, created.id)
        .await?
        .ok_or(AppError::not_found("Floor", created.id))?;
    tracing::info!(building_id = floor.building_id, number = floor.number, "Floor added");
    Ok((StatusCode::CREATED, Json(floor)))
}

/// PUT /update-floor/{floor_id}
///
/// Capacity is recomputed from the resulting dimensions.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFloor>,
) -> AppResult<Json<Floor>> {
    let current = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Floor", id))?;
    let resulting = FloorSpec::new(
        input.length.unwrap_or(current.length),
        input.width.unwrap_or(current.width),
    );
    composition::validate_floor_spec(current.number as usize, &resulting)?;

    let floor = FloorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Floor", id))?;
    Ok(Json(floor))
}

/// DELETE /delete-floor/{floor_id}
///
/// Other floors keep their numbers, so deleting a middle floor leaves a gap.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Floor>> {
    let floor = FloorRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Floor", id))?;
    Ok(Json(floor))
}
