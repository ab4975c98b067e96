//! PostgreSQL implementation of the core persistence gateway.

use async_trait::async_trait;
use floorplan_core::store::{FloorPlanStore, FloorRecord, NewFloor, OccupantRecord, StoreError};
use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::building::CreateBuilding;
use crate::repositories::{BuildingRepo, FloorRepo, PersonnelRepo};

/// [`FloorPlanStore`] backed by a shared connection pool.
///
/// Each method is a single statement on its own connection; nothing spans a
/// transaction.
#[derive(Clone)]
pub struct PgFloorPlanStore {
    pool: PgPool,
}

impl PgFloorPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| {
        tracing::warn!(operation, error = %err, "Floor-plan store call failed");
        StoreError(err.to_string())
    }
}

#[async_trait]
impl FloorPlanStore for PgFloorPlanStore {
    async fn insert_building(&self, floor_count: i32) -> Result<DbId, StoreError> {
        let building = BuildingRepo::create(&self.pool, &CreateBuilding { floor_count })
            .await
            .map_err(store_error("insert_building"))?;
        Ok(building.id)
    }

    async fn floor_numbers(&self, building_id: DbId) -> Result<Vec<i32>, StoreError> {
        FloorRepo::numbers_for_building(&self.pool, building_id)
            .await
            .map_err(store_error("floor_numbers"))
    }

    async fn insert_floor(&self, floor: &NewFloor) -> Result<FloorRecord, StoreError> {
        FloorRepo::insert(&self.pool, floor)
            .await
            .map(FloorRecord::from)
            .map_err(store_error("insert_floor"))
    }

    async fn floors_for_building(&self, building_id: DbId) -> Result<Vec<FloorRecord>, StoreError> {
        let floors = FloorRepo::list_by_building(&self.pool, building_id)
            .await
            .map_err(store_error("floors_for_building"))?;
        Ok(floors.into_iter().map(FloorRecord::from).collect())
    }

    async fn personnel_on_floors(
        &self,
        floor_ids: &[DbId],
    ) -> Result<Vec<OccupantRecord>, StoreError> {
        let personnel = PersonnelRepo::list_by_floors(&self.pool, floor_ids)
            .await
            .map_err(store_error("personnel_on_floors"))?;
        Ok(personnel.into_iter().map(OccupantRecord::from).collect())
    }
}
