use super::*;

#[tokio::test]
async fn deletes_people_and_cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let people = factory::create_people(db).await?;
    factory::create_favorite_people(db, user.id, people.id).await?;

    let repo = PeopleRepository::new(db);

    assert_eq!(repo.delete(people.id).await?, 1);
    assert!(repo.find_by_id(people.id).await?.is_none());
    assert_eq!(entity::prelude::FavoritePeople::find().count(db).await?, 0);

    Ok(())
}
