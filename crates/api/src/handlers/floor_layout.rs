//! Handler for the per-building floor layout view.

use axum::extract::{Path, State};
use axum::Json;
use floorplan_core::layout::{self, FloorLayout, SeatCoordinate};
use floorplan_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// A seat as the 3D front end expects it: the stored `y_coor` is exposed as
/// `z`.
#[derive(Debug, Serialize)]
pub struct TableCoordinate {
    pub x: i32,
    pub z: i32,
}

impl From<SeatCoordinate> for TableCoordinate {
    fn from(seat: SeatCoordinate) -> Self {
        Self {
            x: seat.x,
            z: seat.y,
        }
    }
}

/// One floor in the layout response. `id` is the floor number, not the
/// storage id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorLayoutResponse {
    pub id: i32,
    pub name: String,
    pub area: i64,
    pub occupant_count: usize,
    pub capacity: i64,
    pub table_coordinates: Vec<TableCoordinate>,
    pub users: Vec<String>,
}

impl From<FloorLayout> for FloorLayoutResponse {
    fn from(layout: FloorLayout) -> Self {
        Self {
            id: layout.number,
            name: layout.display_name(),
            area: layout.area,
            occupant_count: layout.occupant_count,
            capacity: layout.capacity,
            table_coordinates: layout
                .seat_coordinates
                .into_iter()
                .map(TableCoordinate::from)
                .collect(),
            users: layout.occupant_names,
        }
    }
}

/// GET /fetch-floors-with-personnels/{building_id}
///
/// Floors are returned in storage order; sort by `id` for presentation.
pub async fn fetch_floors_with_personnels(
    State(state): State<AppState>,
    Path(building_id): Path<DbId>,
) -> AppResult<Json<Vec<FloorLayoutResponse>>> {
    let layouts = layout::layout_for_building(state.store.as_ref(), building_id).await?;
    Ok(Json(layouts.into_iter().map(FloorLayoutResponse::from).collect()))
}
