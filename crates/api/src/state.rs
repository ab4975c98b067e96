use std::sync::Arc;

use floorplan_core::store::FloorPlanStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the CRUD handlers.
    pub pool: floorplan_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gateway for the numbering, composition, and layout workflows.
    pub store: Arc<dyn FloorPlanStore>,
}

impl AppState {
    /// State whose gateway runs on the same pool as the CRUD handlers.
    pub fn new(pool: floorplan_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(floorplan_db::store::PgFloorPlanStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            store,
        }
    }
}
