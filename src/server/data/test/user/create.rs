use super::*;

fn new_user(student_id: &str) -> NewUser {
    NewUser {
        student_id: student_id.to_string(),
        password_hash: "hash".to_string(),
        name: "Somchai".to_string(),
        email: Some("somchai@example.com".to_string()),
        role: Role::User,
    }
}

/// Tests inserting a new user.
///
/// Expected: Ok with role stored as "user" and no profile picture
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(new_user("6410001"), Utc::now())
        .await?;

    assert_eq!(user.student_id, "6410001");
    assert_eq!(user.role, "user");
    assert_eq!(user.profile_picture, None);

    Ok(())
}

/// Tests the unique student ID constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_student_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("6410001"), Utc::now()).await?;

    let result = repo.create(new_user("6410001"), Utc::now()).await;

    assert!(result.is_err());

    Ok(())
}
