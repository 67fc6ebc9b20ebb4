use super::*;

/// Tests creating a character keeps optional attributes.
///
/// Expected: Ok(People) with the given fields
#[tokio::test]
async fn creates_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PeopleRepository::new(db);
    let people = repo.create(params("Han Solo")).await?;

    assert_eq!(people.name, "Han Solo");
    assert_eq!(people.height, Some(183.0));
    assert_eq!(people.mass, None);
    assert_eq!(repo.find_by_id(people.id).await?, Some(people));

    Ok(())
}

/// Tests that character names are not unique.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PeopleRepository::new(db);
    repo.create(params("Clone Trooper")).await?;
    repo.create(params("Clone Trooper")).await?;

    assert_eq!(entity::prelude::People::find().count(db).await?, 2);

    Ok(())
}
