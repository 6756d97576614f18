use super::*;

/// Tests toggling the active flag.
///
/// Expected: Ok(Some) with the new flag persisted
#[tokio::test]
async fn toggles_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let repo = CourtRepository::new(db);
    let updated = repo.update_status(court.id, false).await?.unwrap();

    assert!(!updated.is_active);
    assert!(!repo.find_by_id(court.id).await?.unwrap().is_active);

    let reactivated = repo.update_status(court.id, true).await?.unwrap();
    assert!(reactivated.is_active);

    Ok(())
}

/// Tests toggling a court that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourtRepository::new(db).update_status(404, false).await?;

    assert!(result.is_none());

    Ok(())
}
