use super::*;

/// Tests creating one favorite per kind lands in the matching table.
///
/// Expected: one row in each join table
#[tokio::test]
async fn creates_favorite_in_matching_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;
    let planet = factory::create_planet(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(FavoriteKind::People, user.id, people.id).await?;
    repo.create(FavoriteKind::Planet, user.id, planet.id).await?;
    let vehicle_favorite = repo.create(FavoriteKind::Vehicle, user.id, vehicle.id).await?;

    assert_eq!(entity::prelude::FavoritePeople::find().count(db).await?, 1);
    assert_eq!(entity::prelude::FavoritePlanet::find().count(db).await?, 1);
    assert_eq!(entity::prelude::FavoriteVehicle::find().count(db).await?, 1);
    assert!(repo.exists(FavoriteKind::Vehicle, vehicle_favorite).await?);

    Ok(())
}

#[tokio::test]
async fn item_exists_checks_catalog_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.item_exists(FavoriteKind::Planet, planet.id).await?);
    assert!(!repo.item_exists(FavoriteKind::Vehicle, planet.id).await?);

    Ok(())
}
