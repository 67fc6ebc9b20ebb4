use super::*;

/// Tests deactivating and reactivating a user.
///
/// Expected: Ok(User) reflecting the new flag each time
#[tokio::test]
async fn updates_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let suspended = repo.set_active(created.id, false).await?;
    assert!(!suspended.is_active);

    let reactivated = repo.set_active(created.id, true).await?;
    assert!(reactivated.is_active);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_active(999, false).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
