//! Repository-level tests against a real database: constraints, cascades,
//! and the placement invariant.

use assert_matches::assert_matches;
use floorplan_core::placement::Placement;
use floorplan_core::store::NewFloor;
use floorplan_db::models::building::CreateBuilding;
use floorplan_db::models::floor::UpdateFloor;
use floorplan_db::models::personnel::CreatePersonnel;
use floorplan_db::repositories::{BuildingRepo, FloorRepo, PersonnelRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn building(pool: &PgPool) -> i64 {
    BuildingRepo::create(pool, &CreateBuilding { floor_count: 0 })
        .await
        .unwrap()
        .id
}

fn new_floor(building_id: i64, number: i32) -> NewFloor {
    NewFloor {
        building_id,
        number,
        length: 3,
        width: 2,
        capacity: 6,
    }
}

fn new_person(email: &str) -> CreatePersonnel {
    CreatePersonnel {
        name: "Ana".to_string(),
        surname: "Kaya".to_string(),
        email: email.to_string(),
        password: "pw".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Floors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_floor_number_violates_unique_constraint(pool: PgPool) {
    let b = building(&pool).await;
    FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();

    let err = FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("uq_floors_building_number")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_number_in_different_buildings_is_allowed(pool: PgPool) {
    let a = building(&pool).await;
    let b = building(&pool).await;
    FloorRepo::insert(&pool, &new_floor(a, 1)).await.unwrap();
    FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();

    assert_eq!(FloorRepo::numbers_for_building(&pool, a).await.unwrap(), vec![1]);
    assert_eq!(FloorRepo::numbers_for_building(&pool, b).await.unwrap(), vec![1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn floor_for_missing_building_violates_foreign_key(pool: PgPool) {
    let err = FloorRepo::insert(&pool, &new_floor(999_999, 1)).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn floors_are_listed_in_insert_order(pool: PgPool) {
    let b = building(&pool).await;
    FloorRepo::insert(&pool, &new_floor(b, 2)).await.unwrap();
    FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();

    let numbers: Vec<i32> = FloorRepo::list_by_building(&pool, b)
        .await
        .unwrap()
        .iter()
        .map(|f| f.number)
        .collect();
    assert_eq!(numbers, vec![2, 1]);
}

// ---------------------------------------------------------------------------
// Personnel placement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_placement_violates_check_constraint(pool: PgPool) {
    let person = PersonnelRepo::create(&pool, &new_person("a@example.com")).await.unwrap();

    let err = sqlx::query("UPDATE personnels SET x_coor = 1 WHERE id = $1")
        .bind(person.id)
        .execute(&pool)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref db) if db.constraint() == Some("ck_personnels_placement")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_placement_round_trips_through_the_row(pool: PgPool) {
    let b = building(&pool).await;
    let floor = FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();
    let person = PersonnelRepo::create(&pool, &new_person("a@example.com")).await.unwrap();
    assert_eq!(person.placement().unwrap(), Placement::Unplaced);

    let seat = Placement::Placed {
        floor_id: floor.id,
        x: 2,
        y: 1,
    };
    let placed = PersonnelRepo::set_placement(&pool, person.id, seat)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(placed.placement().unwrap(), seat);

    let on_floor = PersonnelRepo::list_by_floors(&pool, &[floor.id]).await.unwrap();
    assert_eq!(on_floor.len(), 1);
    assert!(PersonnelRepo::list_unplaced(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_placement_on_missing_person_returns_none(pool: PgPool) {
    let result = PersonnelRepo::set_placement(&pool, 999_999, Placement::Unplaced)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_building_unplaces_staff_and_drops_floors(pool: PgPool) {
    let b = building(&pool).await;
    let floor = FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();
    let person = PersonnelRepo::create(&pool, &new_person("a@example.com")).await.unwrap();
    PersonnelRepo::set_placement(
        &pool,
        person.id,
        Placement::Placed {
            floor_id: floor.id,
            x: 0,
            y: 0,
        },
    )
    .await
    .unwrap();

    let deleted = BuildingRepo::delete(&pool, b).await.unwrap();
    assert_eq!(deleted.map(|d| d.id), Some(b));

    assert!(FloorRepo::find_by_id(&pool, floor.id).await.unwrap().is_none());
    let person = PersonnelRepo::find_by_id(&pool, person.id).await.unwrap().unwrap();
    assert_eq!(person.placement().unwrap(), Placement::Unplaced);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_missing_floor_returns_none(pool: PgPool) {
    assert!(FloorRepo::delete(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn updating_dimensions_recomputes_capacity(pool: PgPool) {
    let b = building(&pool).await;
    let floor = FloorRepo::insert(&pool, &new_floor(b, 1)).await.unwrap();

    let updated = FloorRepo::update(
        &pool,
        floor.id,
        &UpdateFloor {
            length: None,
            width: Some(7),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!((updated.length, updated.width, updated.capacity), (3, 7, 21));
}
