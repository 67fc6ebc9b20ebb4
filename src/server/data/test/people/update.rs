use super::*;

#[tokio::test]
async fn renames_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::create_people_named(db, "Anakin Skywalker").await?;

    let repo = PeopleRepository::new(db);
    let updated = repo
        .update(UpdatePeopleParams {
            id: created.id,
            name: Some("Darth Vader".to_string()),
        })
        .await?;

    assert_eq!(updated.name, "Darth Vader");
    assert_eq!(updated.homeworld, created.homeworld);

    Ok(())
}

/// Tests an update without a name.
///
/// Expected: Ok(People) unchanged
#[tokio::test]
async fn keeps_name_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::create_people_named(db, "Chewbacca").await?;

    let repo = PeopleRepository::new(db);
    let updated = repo
        .update(UpdatePeopleParams {
            id: created.id,
            name: None,
        })
        .await?;

    assert_eq!(updated.name, "Chewbacca");

    Ok(())
}

#[tokio::test]
async fn fails_for_unknown_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PeopleRepository::new(db);
    let result = repo
        .update(UpdatePeopleParams {
            id: 404,
            name: Some("Nobody".to_string()),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
