use super::*;

/// Tests exact-match search.
///
/// Verifies that every character with the exact name is returned and that partial
/// names do not match.
///
/// Expected: Ok(Vec<People>) with both duplicates
#[tokio::test]
async fn returns_all_exact_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::people::create_people_named(db, "R2-D2").await?;
    factory::people::create_people_named(db, "R2-D2").await?;
    factory::people::create_people_named(db, "C-3PO").await?;

    let repo = PeopleRepository::new(db);

    assert_eq!(repo.find_by_name("R2-D2").await?.len(), 2);
    assert!(repo.find_by_name("R2").await?.is_empty());

    Ok(())
}
