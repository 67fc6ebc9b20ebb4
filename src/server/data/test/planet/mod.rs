use crate::server::{data::planet::PlanetRepository, model::planet::CreatePlanetParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(name: &str) -> CreatePlanetParams {
    CreatePlanetParams {
        name: name.to_string(),
        diameter: Some(12500.0),
        rotation_period: Some(24.0),
        orbital_period: Some(364.0),
        gravity: Some("1 standard".to_string()),
        population: Some(2_000_000_000),
        climate: Some("temperate".to_string()),
        terrain: Some("grasslands, mountains".to_string()),
        surface_water: Some(40),
    }
}

/// Tests creating a planet and reading it back.
///
/// Expected: Ok(Planet) equal to the stored row
#[tokio::test]
async fn creates_and_finds_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo.create(params("Alderaan")).await?;

    assert_eq!(planet.population, Some(2_000_000_000));
    assert_eq!(repo.find_by_id(planet.id).await?, Some(planet));

    Ok(())
}

#[tokio::test]
async fn name_exists_matches_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::create_planet_named(db, "Hoth").await?;

    let repo = PlanetRepository::new(db);

    assert!(repo.name_exists("Hoth").await?);
    assert!(!repo.name_exists("Endor").await?);

    Ok(())
}

/// Tests listing planets in id order.
///
/// Expected: Ok(Vec<Planet>) in insertion order
#[tokio::test]
async fn lists_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::create_planet_named(db, "Tatooine").await?;
    factory::planet::create_planet_named(db, "Naboo").await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tatooine", "Naboo"]);

    Ok(())
}

#[tokio::test]
async fn deletes_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);

    assert_eq!(repo.delete(planet.id).await?, 1);
    assert_eq!(repo.delete(planet.id).await?, 0);
    assert!(repo.find_by_id(planet.id).await?.is_none());

    Ok(())
}
