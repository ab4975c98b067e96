//! Repository for the `placed_objects` table.

use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::placed_object::{CreatePlacedObject, PlacedObject, UpdatePlacedObject};

const COLUMNS: &str = "id, floor_id, o_type, state, x_coor, y_coor, created_at";

/// Provides CRUD operations for placed objects.
pub struct PlacedObjectRepo;

impl PlacedObjectRepo {
    /// Place an object on one cell, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlacedObject,
    ) -> Result<PlacedObject, sqlx::Error> {
        let query = format!(
            "INSERT INTO placed_objects (floor_id, o_type, state, x_coor, y_coor)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(input.floor_id)
            .bind(input.o_type)
            .bind(input.state)
            .bind(input.x_coor)
            .bind(input.y_coor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlacedObject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM placed_objects WHERE id = $1");
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PlacedObject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM placed_objects ORDER BY id ASC");
        sqlx::query_as::<_, PlacedObject>(&query).fetch_all(pool).await
    }

    /// Update a placed object. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlacedObject,
    ) -> Result<Option<PlacedObject>, sqlx::Error> {
        let query = format!(
            "UPDATE placed_objects SET
                floor_id = COALESCE($2, floor_id),
                o_type = COALESCE($3, o_type),
                state = COALESCE($4, state),
                x_coor = COALESCE($5, x_coor),
                y_coor = COALESCE($6, y_coor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(id)
            .bind(input.floor_id)
            .bind(input.o_type)
            .bind(input.state)
            .bind(input.x_coor)
            .bind(input.y_coor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a placed object, returning the deleted row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<PlacedObject>, sqlx::Error> {
        let query = format!("DELETE FROM placed_objects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, PlacedObject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
