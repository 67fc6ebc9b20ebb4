use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, created.email);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(999).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that credentials lookup exposes the stored hash.
///
/// Expected: Ok(Some(UserCredentials)) with the stored password column
#[tokio::test]
async fn finds_credentials_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("obi@wan.org")
        .password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("obi@wan.org").await?.unwrap();

    assert_eq!(credentials.password_hash, "stored-hash");
    assert_eq!(credentials.user.email, "obi@wan.org");
    assert!(repo.find_credentials_by_email("nobody@wan.org").await?.is_none());

    Ok(())
}
