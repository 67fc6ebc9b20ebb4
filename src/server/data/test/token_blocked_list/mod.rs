use crate::server::data::token_blocked_list::TokenBlockedListRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that a blocked jti is reported as blocked.
///
/// Expected: is_blocked true only for the recorded jti
#[tokio::test]
async fn blocked_jti_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TokenBlockedListRepository::new(db);
    repo.block("4f1c2b9e-jti").await?;

    assert!(repo.is_blocked("4f1c2b9e-jti").await?);
    assert!(!repo.is_blocked("another-jti").await?);

    Ok(())
}

/// Tests blocking the same jti twice.
///
/// The jti column is indexed but not unique, so repeated logouts are harmless.
///
/// Expected: Ok(()) for both calls
#[tokio::test]
async fn blocking_twice_is_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blocked_token(db, "same-jti").await?;

    let repo = TokenBlockedListRepository::new(db);
    repo.block("same-jti").await?;

    assert!(repo.is_blocked("same-jti").await?);

    Ok(())
}
