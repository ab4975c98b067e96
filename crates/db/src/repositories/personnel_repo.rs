//! Repository for the `personnels` table.

use floorplan_core::placement::Placement;
use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel};

const COLUMNS: &str =
    "id, name, surname, email, password, floor_id, x_coor, y_coor, created_at";

/// Provides CRUD and placement operations for personnel.
pub struct PersonnelRepo;

impl PersonnelRepo {
    /// Insert a new, unplaced personnel record.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePersonnel,
    ) -> Result<Personnel, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnels (name, surname, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Find a personnel record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnels WHERE id = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all personnel.
    pub async fn list(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnels ORDER BY id ASC");
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// List personnel without a seat.
    pub async fn list_unplaced(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personnels
             WHERE floor_id IS NULL AND x_coor IS NULL AND y_coor IS NULL
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// List personnel seated on one floor.
    pub async fn list_by_floor(
        pool: &PgPool,
        floor_id: DbId,
    ) -> Result<Vec<Personnel>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM personnels WHERE floor_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(floor_id)
            .fetch_all(pool)
            .await
    }

    /// List personnel seated on any of `floor_ids`.
    pub async fn list_by_floors(
        pool: &PgPool,
        floor_ids: &[DbId],
    ) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personnels WHERE floor_id = ANY($1) ORDER BY id ASC"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(floor_ids)
            .fetch_all(pool)
            .await
    }

    /// Update personnel details. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnel,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnels SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                email = COALESCE($4, email),
                password = COALESCE($5, password)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.password)
            .fetch_optional(pool)
            .await
    }

    /// Write all three placement columns at once.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_placement(
        pool: &PgPool,
        id: DbId,
        placement: Placement,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let (floor_id, x_coor, y_coor) = placement.columns();
        let query = format!(
            "UPDATE personnels SET floor_id = $2, x_coor = $3, y_coor = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(floor_id)
            .bind(x_coor)
            .bind(y_coor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a personnel record, returning the deleted row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("DELETE FROM personnels WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
