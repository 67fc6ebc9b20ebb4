use super::*;

/// Tests creating a user.
///
/// Verifies that the new user is active and stored with the given hash.
///
/// Expected: Ok(User) with is_active == true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "luke@tatooine.org".to_string(),
            "$argon2id$hash".to_string(),
            "Farm boy".to_string(),
        )
        .await?;

    assert!(user.is_active);
    assert_eq!(user.email, "luke@tatooine.org");
    assert_eq!(user.description, "Farm boy");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "$argon2id$hash");

    Ok(())
}

/// Tests the unique index on email.
///
/// Expected: Err(DbErr) for the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("han@falcon.net".to_string(), "h".to_string(), "d".to_string())
        .await?;
    let result = repo
        .create("han@falcon.net".to_string(), "h".to_string(), "d".to_string())
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a user created inside a rolled back transaction is not persisted.
///
/// Expected: no rows after rollback
#[tokio::test]
async fn create_in_rolled_back_transaction_is_discarded() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    UserRepository::new(&txn)
        .create("leia@alderaan.org".to_string(), "h".to_string(), "d".to_string())
        .await?;
    txn.rollback().await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests how a duplicate insert that slipped past the existence check is reported.
///
/// Verifies that the unique violation from the email index becomes the same
/// `BadRequest` as the regular duplicate check.
///
/// Expected: AppError::BadRequest("El usuario ya existe")
#[tokio::test]
async fn duplicate_insert_maps_to_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "han@falcon.net").await?;
    let err = UserRepository::new(db)
        .create("han@falcon.net".to_string(), "h".to_string(), "d".to_string())
        .await
        .unwrap_err();

    match insert_error(err) {
        AppError::BadRequest(msg) => assert_eq!(msg, "El usuario ya existe"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests that other insert failures stay internal.
///
/// Expected: AppError::InternalError
#[tokio::test]
async fn other_insert_failures_map_to_internal_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = UserRepository::new(db)
        .create("leia@alderaan.org".to_string(), "h".to_string(), "d".to_string())
        .await
        .unwrap_err();

    assert!(matches!(insert_error(err), AppError::InternalError(_)));

    Ok(())
}
