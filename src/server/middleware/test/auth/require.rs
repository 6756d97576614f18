use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthErr(UserNotInSession))
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that refers to a user who no longer exists.
///
/// Expected: Err(AuthErr(UserNotInDatabase))
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests that a logged-in user resolves to a caller.
///
/// Expected: Ok(Caller) carrying the user's ID, student ID and role
#[tokio::test]
async fn resolves_logged_in_caller() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let caller = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(caller.user_id, user.id);
    assert_eq!(caller.student_id, user.student_id);
    assert_eq!(caller.role, Role::User);

    Ok(())
}

/// Tests the admin permission for a regular user and for an admin.
///
/// Expected: AccessDenied for the user, Ok for the admin
#[tokio::test]
async fn requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let auth_session = AuthSession::new(session);

    auth_session.set_user_id(user.id).await?;
    let denied = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    let caller = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;
    assert!(caller.is_admin());

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: Err(AuthErr(UserNotInSession)) after clear
#[tokio::test]
async fn clear_logs_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);
    assert!(matches!(
        AuthGuard::new(db, session).require(&[]).await,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
