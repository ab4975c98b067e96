//! Liveness and schema status for the floor-plan service.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "floorplan-api";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    /// `ok` when the database answers and migrations have been applied,
    /// otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest applied migration; `null` when it could not be read.
    pub schema_version: Option<i64>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let schema_version = match floorplan_db::schema_version(&state.pool).await {
        Ok(version) => version,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read schema version");
            None
        }
    };
    let db_healthy =
        schema_version.is_some() || floorplan_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        service: SERVICE_NAME,
        status: if schema_version.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
