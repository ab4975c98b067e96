//! Floor layout aggregation: geometry and occupancy per floor of a building.
//!
//! A layout is keyed by the floor's `number`; the storage id of a floor is
//! never part of it. Capacity is not stored per seat: it is the floor area.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::store::{FloorPlanStore, FloorRecord, OccupantRecord};
use crate::types::DbId;

/// A seat position on the floor grid.
///
/// Occupants without a stored coordinate are reported at `(0, 0)`, so an
/// origin seat and a missing seat look the same here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatCoordinate {
    pub x: i32,
    pub y: i32,
}

/// Presentation-ready view of one floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorLayout {
    pub number: i32,
    pub area: i64,
    pub capacity: i64,
    pub occupant_count: usize,
    pub seat_coordinates: Vec<SeatCoordinate>,
    pub occupant_names: Vec<String>,
}

impl FloorLayout {
    /// Display label, e.g. `Floor 3`.
    pub fn display_name(&self) -> String {
        format!("Floor {}", self.number)
    }
}

/// `"{name} {surname}"` with surrounding whitespace removed.
pub fn occupant_name(name: &str, surname: &str) -> String {
    format!("{name} {surname}").trim().to_string()
}

/// Build the layout of `floor` from the occupants seated on it.
pub fn floor_layout(floor: &FloorRecord, occupants: &[OccupantRecord]) -> FloorLayout {
    let area = i64::from(floor.length) * i64::from(floor.width);

    FloorLayout {
        number: floor.number,
        area,
        capacity: area,
        occupant_count: occupants.len(),
        seat_coordinates: occupants
            .iter()
            .map(|o| SeatCoordinate {
                x: o.x_coor.unwrap_or(0),
                y: o.y_coor.unwrap_or(0),
            })
            .collect(),
        occupant_names: occupants
            .iter()
            .map(|o| occupant_name(&o.name, &o.surname))
            .collect(),
    }
}

/// Layouts for every floor of `building_id`, in the order the store returns
/// the floors.
///
/// Returns [`CoreError::NotFound`] when the building has no floors and
/// [`CoreError::Query`] when any read fails. No partial result is produced.
pub async fn layout_for_building<S>(
    store: &S,
    building_id: DbId,
) -> Result<Vec<FloorLayout>, CoreError>
where
    S: FloorPlanStore + ?Sized,
{
    let floors = store
        .floors_for_building(building_id)
        .await
        .map_err(|e| CoreError::Query(format!("failed to fetch floors: {e}")))?;

    if floors.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Floors for building",
            id: building_id,
        });
    }

    let floor_ids: Vec<DbId> = floors.iter().map(|f| f.id).collect();
    let personnel = store
        .personnel_on_floors(&floor_ids)
        .await
        .map_err(|e| CoreError::Query(format!("failed to fetch personnel: {e}")))?;

    let mut by_floor: HashMap<DbId, Vec<OccupantRecord>> = HashMap::new();
    for person in personnel {
        if let Some(floor_id) = person.floor_id {
            by_floor.entry(floor_id).or_default().push(person);
        }
    }

    Ok(floors
        .iter()
        .map(|floor| {
            let occupants = by_floor.get(&floor.id).map(Vec::as_slice).unwrap_or(&[]);
            floor_layout(floor, occupants)
        })
        .collect())
}

/// Sort layouts by floor number. Storage order is not guaranteed to be.
pub fn sorted_by_number(mut layouts: Vec<FloorLayout>) -> Vec<FloorLayout> {
    layouts.sort_by_key(|l| l.number);
    layouts
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::store::memory::MemoryStore;

    fn record(id: DbId, number: i32, length: i32, width: i32) -> FloorRecord {
        FloorRecord {
            id,
            building_id: 1,
            number,
            length,
            width,
            capacity: length.saturating_mul(width),
        }
    }

    fn occupant(name: &str, surname: &str, x: Option<i32>, y: Option<i32>) -> OccupantRecord {
        OccupantRecord {
            id: 1,
            floor_id: Some(10),
            name: name.to_string(),
            surname: surname.to_string(),
            x_coor: x,
            y_coor: y,
        }
    }

    // -- pure helpers -----------------------------------------------------

    #[test]
    fn name_is_trimmed_when_surname_is_empty() {
        assert_eq!(occupant_name("Ana", ""), "Ana");
    }

    #[test]
    fn name_is_trimmed_when_name_is_empty() {
        assert_eq!(occupant_name("", "Kaya"), "Kaya");
        assert_eq!(occupant_name("", ""), "");
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(occupant_name("Ana", "Kaya"), "Ana Kaya");
    }

    #[test]
    fn area_and_capacity_are_length_times_width() {
        let layout = floor_layout(&record(10, 2, 10, 4), &[]);
        assert_eq!(layout.area, 40);
        assert_eq!(layout.capacity, 40);
        assert_eq!(layout.display_name(), "Floor 2");
    }

    #[test]
    fn large_floors_do_not_overflow_area() {
        let layout = floor_layout(&record(10, 1, i32::MAX, 2), &[]);
        assert_eq!(layout.area, i64::from(i32::MAX) * 2);
    }

    #[test]
    fn seat_coordinates_follow_occupants() {
        let layout = floor_layout(
            &record(10, 1, 8, 8),
            &[occupant("Ana", "", Some(5), Some(7))],
        );
        assert_eq!(layout.occupant_count, 1);
        assert_eq!(layout.seat_coordinates, vec![SeatCoordinate { x: 5, y: 7 }]);
        assert_eq!(layout.occupant_names, vec!["Ana".to_string()]);
    }

    #[test]
    fn missing_coordinates_default_to_origin() {
        let layout = floor_layout(&record(10, 1, 8, 8), &[occupant("A", "B", None, Some(3))]);
        assert_eq!(layout.seat_coordinates, vec![SeatCoordinate { x: 0, y: 3 }]);
    }

    // -- aggregation ------------------------------------------------------

    #[tokio::test]
    async fn building_without_floors_is_not_found() {
        let store = MemoryStore::new();
        let building = store.add_building();

        let result = layout_for_building(&store, building).await;
        assert_matches!(result, Err(CoreError::NotFound { id, .. }) if id == building);
    }

    #[tokio::test]
    async fn unoccupied_floors_have_empty_lists() {
        let store = MemoryStore::new();
        let building = store.add_building();
        store.add_floor(building, 1, 10, 4);
        store.add_floor(building, 2, 8, 8);

        let layouts = layout_for_building(&store, building).await.unwrap();
        assert_eq!(layouts.len(), 2);
        for layout in &layouts {
            assert_eq!(layout.occupant_count, 0);
            assert!(layout.seat_coordinates.is_empty());
            assert!(layout.occupant_names.is_empty());
        }
    }

    #[tokio::test]
    async fn occupants_are_grouped_by_floor() {
        let store = MemoryStore::new();
        let building = store.add_building();
        let ground = store.add_floor(building, 1, 10, 4);
        let upper = store.add_floor(building, 2, 8, 8);
        store.add_person(Some(ground), "Ana", "", (Some(5), Some(7)));
        store.add_person(Some(upper), "Bo", "Lind", (Some(1), Some(2)));
        store.add_person(Some(upper), "Cem", "Ay", (Some(3), Some(4)));
        store.add_person(None, "Unplaced", "Person", (None, None));

        let layouts = layout_for_building(&store, building).await.unwrap();

        assert_eq!(layouts[0].number, 1);
        assert_eq!(layouts[0].occupant_names, vec!["Ana".to_string()]);
        assert_eq!(layouts[0].seat_coordinates, vec![SeatCoordinate { x: 5, y: 7 }]);
        assert_eq!(layouts[1].number, 2);
        assert_eq!(layouts[1].occupant_count, 2);
        assert_eq!(
            layouts[1].occupant_names,
            vec!["Bo Lind".to_string(), "Cem Ay".to_string()]
        );
    }

    #[tokio::test]
    async fn storage_order_is_preserved() {
        let store = MemoryStore::new();
        let building = store.add_building();
        store.add_floor(building, 2, 1, 1);
        store.add_floor(building, 1, 1, 1);

        let layouts = layout_for_building(&store, building).await.unwrap();
        let numbers: Vec<i32> = layouts.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![2, 1]);

        let sorted: Vec<i32> = sorted_by_number(layouts).iter().map(|l| l.number).collect();
        assert_eq!(sorted, vec![1, 2]);
    }

    #[tokio::test]
    async fn personnel_query_failure_aborts_everything() {
        let mut store = MemoryStore::new();
        let building = store.add_building();
        store.add_floor(building, 1, 1, 1);
        store.fail_personnel_queries = true;

        let result = layout_for_building(&store, building).await;
        assert_matches!(result, Err(CoreError::Query(msg)) if msg.contains("personnel"));
    }

    #[tokio::test]
    async fn floor_query_failure_is_a_query_error() {
        let mut store = MemoryStore::new();
        store.fail_floor_queries = true;

        let result = layout_for_building(&store, 1).await;
        assert_matches!(result, Err(CoreError::Query(msg)) if msg.contains("floors"));
    }
}
