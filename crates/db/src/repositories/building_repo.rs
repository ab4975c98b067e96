//! Repository for the `buildings` table.

use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::building::{Building, CreateBuilding, UpdateBuilding};

const COLUMNS: &str = "id, floor_count, created_at";

/// Provides CRUD operations for buildings.
pub struct BuildingRepo;

impl BuildingRepo {
    /// Insert a new building, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> Result<Building, sqlx::Error> {
        let query = format!(
            "INSERT INTO buildings (floor_count) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(input.floor_count)
            .fetch_one(pool)
            .await
    }

    /// Find a building by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all buildings, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings ORDER BY id ASC");
        sqlx::query_as::<_, Building>(&query).fetch_all(pool).await
    }

    /// Update a building. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "UPDATE buildings SET floor_count = COALESCE($2, floor_count)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(input.floor_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete a building with its floors and placed objects, returning the
    /// deleted row.
    ///
    /// Runs in a transaction: personnel seated in the building are unplaced
    /// first, then the building row is removed (floors cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE personnels SET floor_id = NULL, x_coor = NULL, y_coor = NULL
             WHERE floor_id IN (SELECT id FROM floors WHERE building_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!("DELETE FROM buildings WHERE id = $1 RETURNING {COLUMNS}");
        let deleted = sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }
}
