use super::*;

/// Tests finding an existing user by student ID.
///
/// Expected: Ok(Some(Model)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .student_id("6410001")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_student_id("6410001").await?;

    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests querying for a non-existent student ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_student_id("0000000").await?;

    assert!(found.is_none());

    Ok(())
}
