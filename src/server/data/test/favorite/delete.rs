use super::*;

/// Tests deleting a favorite leaves the user and item in place.
///
/// Expected: 1 row affected, catalog row kept
#[tokio::test]
async fn deletes_only_the_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let favorite = factory::create_favorite_vehicle(db, user.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete(FavoriteKind::Vehicle, favorite.id).await?, 1);
    assert!(!repo.exists(FavoriteKind::Vehicle, favorite.id).await?);
    assert_eq!(entity::prelude::Vehicle::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the kind selects the table.
///
/// Expected: deleting a vehicle favorite id from the planet table affects nothing
#[tokio::test]
async fn kind_selects_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let favorite = factory::create_favorite_vehicle(db, user.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete(FavoriteKind::Planet, favorite.id).await?, 0);
    assert!(repo.exists(FavoriteKind::Vehicle, favorite.id).await?);

    Ok(())
}
