use crate::server::{data::vehicle::VehicleRepository, model::vehicle::CreateVehicleParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a vehicle and reading it back.
///
/// Expected: Ok(Vehicle) equal to the stored row
#[tokio::test]
async fn creates_and_finds_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(CreateVehicleParams {
            name: "Sand Crawler".to_string(),
            model: Some("Digger Crawler".to_string()),
            vehicle_class: Some("wheeled".to_string()),
            manufacturer: Some("Corellia Mining Corporation".to_string()),
            cost_in_credits: Some(150_000),
            length: Some(36.8),
            crew: Some(46),
            passengers: Some(30),
            max_atmosphering_speed: Some(30.0),
            cargo_capacity: Some(50_000.0),
            consumables: Some("2 months".to_string()),
        })
        .await?;

    assert_eq!(vehicle.crew, Some(46));
    assert_eq!(repo.find_by_id(vehicle.id).await?, Some(vehicle));

    Ok(())
}

#[tokio::test]
async fn name_exists_matches_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::create_vehicle_named(db, "Snowspeeder").await?;

    let repo = VehicleRepository::new(db);

    assert!(repo.name_exists("Snowspeeder").await?);
    assert!(!repo.name_exists("Speeder bike").await?);

    Ok(())
}

#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);

    assert_eq!(repo.delete(vehicle.id).await?, 1);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
