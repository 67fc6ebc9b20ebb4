use super::*;

#[tokio::test]
async fn detects_existing_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "yoda@dagobah.org").await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("yoda@dagobah.org").await?);
    assert!(!repo.email_exists("vader@empire.gov").await?);

    Ok(())
}
