use super::*;

/// Tests aggregation across all three favorite tables.
///
/// Verifies that each kind is read from its own join table and resolved to the
/// owner's email and the catalog item.
///
/// Expected: Ok(Favorites) with one entry per kind
#[tokio::test]
async fn aggregates_each_kind_from_its_own_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "luke@tatooine.org").await?;
    let people = factory::people::create_people_named(db, "Yoda").await?;
    let planet = factory::planet::create_planet_named(db, "Dagobah").await?;
    let vehicle = factory::vehicle::create_vehicle_named(db, "X-34 landspeeder").await?;

    factory::create_favorite_people(db, user.id, people.id).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;
    factory::create_favorite_vehicle(db, user.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_all(None).await?;

    assert_eq!(favorites.people.len(), 1);
    assert_eq!(favorites.people[0].people.name, "Yoda");
    assert_eq!(favorites.people[0].user_email, "luke@tatooine.org");

    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].planet.name, "Dagobah");

    assert_eq!(favorites.vehicles.len(), 1);
    assert_eq!(favorites.vehicles[0].vehicle.name, "X-34 landspeeder");

    Ok(())
}

/// Tests that a planet favorite never shows up as a vehicle favorite.
///
/// Expected: Ok(Favorites) with no vehicles
#[tokio::test]
async fn planet_favorites_do_not_leak_into_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_all(None).await?;

    assert_eq!(favorites.planets.len(), 1);
    assert!(favorites.vehicles.is_empty());

    Ok(())
}

/// Tests filtering by owner.
///
/// Expected: only the favorites of the requested user
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;
    factory::create_favorite_people(db, luke.id, people.id).await?;
    factory::create_favorite_people(db, leia.id, people.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.get_all(None).await?.people.len(), 2);

    let only_leia = repo.get_all(Some(leia.id)).await?;
    assert_eq!(only_leia.people.len(), 1);
    assert_eq!(only_leia.people[0].user_email, leia.email);

    Ok(())
}

#[tokio::test]
async fn empty_tables_yield_empty_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_all(None).await?;

    assert!(favorites.people.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.vehicles.is_empty());

    Ok(())
}
