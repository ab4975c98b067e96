//! Repository for the `floors` table.

use floorplan_core::store::NewFloor;
use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::floor::{Floor, UpdateFloor};

const COLUMNS: &str = "id, building_id, number, length, width, capacity, created_at";

/// Provides CRUD operations for floors.
///
/// There is no plain `create`: floors are numbered, so inserts go through
/// the core numbering workflow which calls [`FloorRepo::insert`].
pub struct FloorRepo;

impl FloorRepo {
    /// Insert a floor with an already-assigned number.
    ///
    /// Fails with a unique violation on `uq_floors_building_number` if the
    /// number is taken in that building.
    pub async fn insert(pool: &PgPool, input: &NewFloor) -> Result<Floor, sqlx::Error> {
        let query = format!(
            "INSERT INTO floors (building_id, number, length, width, capacity)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(input.building_id)
            .bind(input.number)
            .bind(input.length)
            .bind(input.width)
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a floor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE id = $1");
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every floor.
    pub async fn list(pool: &PgPool) -> Result<Vec<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors ORDER BY id ASC");
        sqlx::query_as::<_, Floor>(&query).fetch_all(pool).await
    }

    /// List the floors of a building in insertion order.
    ///
    /// Insertion order usually matches `number` but is not guaranteed to.
    pub async fn list_by_building(
        pool: &PgPool,
        building_id: DbId,
    ) -> Result<Vec<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE building_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Floor>(&query)
            .bind(building_id)
            .fetch_all(pool)
            .await
    }

    /// Every floor number used in a building.
    pub async fn numbers_for_building(
        pool: &PgPool,
        building_id: DbId,
    ) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT number FROM floors WHERE building_id = $1")
            .bind(building_id)
            .fetch_all(pool)
            .await
    }

    /// Update floor geometry, recomputing `capacity = length * width`.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFloor,
    ) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!(
            "UPDATE floors SET
                length = COALESCE($2, length),
                width = COALESCE($3, width),
                capacity = COALESCE($2, length) * COALESCE($3, width)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .bind(input.length)
            .bind(input.width)
            .fetch_optional(pool)
            .await
    }

    /// Delete a floor and its placed objects, returning the deleted row.
    ///
    /// Personnel seated on the floor are unplaced in the same transaction.
    /// Remaining floors keep their numbers.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE personnels SET floor_id = NULL, x_coor = NULL, y_coor = NULL
             WHERE floor_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!("DELETE FROM floors WHERE id = $1 RETURNING {COLUMNS}");
        let deleted = sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }
}
