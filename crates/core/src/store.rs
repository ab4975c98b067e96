//! Persistence gateway used by the numbering, composition, and layout logic.
//!
//! The trait covers only the table operations those workflows need. Plain
//! CRUD for every table lives in the `db` crate's repositories.

use async_trait::async_trait;

use crate::types::DbId;

/// A failed gateway call. Carries the backend's error text verbatim.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// A row from the `floors` table as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRecord {
    pub id: DbId,
    pub building_id: DbId,
    pub number: i32,
    pub length: i32,
    pub width: i32,
    pub capacity: i32,
}

/// Values for a floor insert. `number` must come from
/// [`crate::numbering::next_floor_number`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFloor {
    pub building_id: DbId,
    pub number: i32,
    pub length: i32,
    pub width: i32,
    pub capacity: i32,
}

/// The subset of a `personnels` row the layout view reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupantRecord {
    pub id: DbId,
    pub floor_id: Option<DbId>,
    pub name: String,
    pub surname: String,
    pub x_coor: Option<i32>,
    pub y_coor: Option<i32>,
}

/// Table-level operations consumed by the core workflows.
///
/// Each call is an independent, awaited round trip. Implementations give no
/// cross-call atomicity.
#[async_trait]
pub trait FloorPlanStore: Send + Sync {
    /// Insert a building row and return its id.
    async fn insert_building(&self, floor_count: i32) -> Result<DbId, StoreError>;

    /// Every floor `number` currently stored for `building_id`, in any order.
    async fn floor_numbers(&self, building_id: DbId) -> Result<Vec<i32>, StoreError>;

    /// Insert a floor row and return it as stored.
    async fn insert_floor(&self, floor: &NewFloor) -> Result<FloorRecord, StoreError>;

    /// All floors of a building in storage order.
    async fn floors_for_building(&self, building_id: DbId)
        -> Result<Vec<FloorRecord>, StoreError>;

    /// Personnel seated on any of `floor_ids`.
    async fn personnel_on_floors(
        &self,
        floor_ids: &[DbId],
    ) -> Result<Vec<OccupantRecord>, StoreError>;
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory gateway for unit tests, with switchable failures.

    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Tables {
        buildings: Vec<(DbId, i32)>,
        floors: Vec<FloorRecord>,
        personnel: Vec<OccupantRecord>,
        next_id: DbId,
    }

    #[derive(Default)]
    pub struct MemoryStore {
        tables: Mutex<Tables>,
        /// 1-based count of floor inserts after which inserts start failing.
        pub fail_floor_insert_at: Option<usize>,
        pub fail_building_insert: bool,
        pub fail_floor_queries: bool,
        pub fail_personnel_queries: bool,
        floor_inserts: Mutex<usize>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn building_count(&self) -> usize {
            self.tables.lock().unwrap().buildings.len()
        }

        pub fn building_floor_count(&self, id: DbId) -> Option<i32> {
            self.tables
                .lock()
                .unwrap()
                .buildings
                .iter()
                .find(|(b, _)| *b == id)
                .map(|(_, count)| *count)
        }

        pub fn floors_of(&self, building_id: DbId) -> Vec<FloorRecord> {
            self.tables
                .lock()
                .unwrap()
                .floors
                .iter()
                .filter(|f| f.building_id == building_id)
                .cloned()
                .collect()
        }

        pub fn add_building(&self) -> DbId {
            let mut t = self.tables.lock().unwrap();
            t.next_id += 1;
            let id = t.next_id;
            t.buildings.push((id, 0));
            id
        }

        pub fn add_floor(&self, building_id: DbId, number: i32, length: i32, width: i32) -> DbId {
            let mut t = self.tables.lock().unwrap();
            t.next_id += 1;
            let id = t.next_id;
            t.floors.push(FloorRecord {
                id,
                building_id,
                number,
                length,
                width,
                capacity: length.saturating_mul(width),
            });
            id
        }

        pub fn add_person(
            &self,
            floor_id: Option<DbId>,
            name: &str,
            surname: &str,
            coords: (Option<i32>, Option<i32>),
        ) -> DbId {
            let mut t = self.tables.lock().unwrap();
            t.next_id += 1;
            let id = t.next_id;
            t.personnel.push(OccupantRecord {
                id,
                floor_id,
                name: name.to_string(),
                surname: surname.to_string(),
                x_coor: coords.0,
                y_coor: coords.1,
            });
            id
        }
    }

    #[async_trait]
    impl FloorPlanStore for MemoryStore {
        async fn insert_building(&self, floor_count: i32) -> Result<DbId, StoreError> {
            if self.fail_building_insert {
                return Err(StoreError("buildings insert rejected".into()));
            }
            let mut t = self.tables.lock().unwrap();
            t.next_id += 1;
            let id = t.next_id;
            t.buildings.push((id, floor_count));
            Ok(id)
        }

        async fn floor_numbers(&self, building_id: DbId) -> Result<Vec<i32>, StoreError> {
            if self.fail_floor_queries {
                return Err(StoreError("floors select timed out".into()));
            }
            Ok(self.floors_of(building_id).iter().map(|f| f.number).collect())
        }

        async fn insert_floor(&self, floor: &NewFloor) -> Result<FloorRecord, StoreError> {
            {
                let mut count = self.floor_inserts.lock().unwrap();
                *count += 1;
                if self.fail_floor_insert_at.is_some_and(|n| *count >= n) {
                    return Err(StoreError("floors insert rejected".into()));
                }
            }
            let mut t = self.tables.lock().unwrap();
            t.next_id += 1;
            let record = FloorRecord {
                id: t.next_id,
                building_id: floor.building_id,
                number: floor.number,
                length: floor.length,
                width: floor.width,
                capacity: floor.capacity,
            };
            t.floors.push(record.clone());
            Ok(record)
        }

        async fn floors_for_building(
            &self,
            building_id: DbId,
        ) -> Result<Vec<FloorRecord>, StoreError> {
            if self.fail_floor_queries {
                return Err(StoreError("floors select timed out".into()));
            }
            Ok(self.floors_of(building_id))
        }

        async fn personnel_on_floors(
            &self,
            floor_ids: &[DbId],
        ) -> Result<Vec<OccupantRecord>, StoreError> {
            if self.fail_personnel_queries {
                return Err(StoreError("personnels select timed out".into()));
            }
            Ok(self
                .tables
                .lock()
                .unwrap()
                .personnel
                .iter()
                .filter(|p| p.floor_id.is_some_and(|f| floor_ids.contains(&f)))
                .cloned()
                .collect())
        }
    }
}
