use super::*;

/// Tests deleting a user also removes their favorites.
///
/// Expected: 1 row affected and no favorites left
#[tokio::test]
async fn deletes_user_and_cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(entity::prelude::FavoritePlanet::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Planet::find().count(db).await?, 1);

    Ok(())
}

#[tokio::test]
async fn deleting_unknown_user_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(42).await?, 0);

    Ok(())
}
