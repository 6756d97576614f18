use super::*;

/// Tests marking a booking notified.
///
/// Verifies the flag flips once and a second call reports no change.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn marks_notified_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user, &court).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.mark_notified(booking.id, Utc::now()).await?);
    assert!(!repo.mark_notified(booking.id, Utc::now()).await?);

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert!(stored.notification_sent);

    Ok(())
}

/// Tests that a marked booking drops out of the due query.
///
/// Expected: due before marking, not due after
#[tokio::test]
async fn marked_booking_is_no_longer_due() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = BookingFactory::new(db, &user, &court)
        .window(at(10, 0), at(11, 0))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    assert_eq!(repo.find_due_for_notification(at(10, 0)).await?.len(), 1);

    repo.mark_notified(booking.id, at(9, 59)).await?;

    assert!(repo.find_due_for_notification(at(10, 0)).await?.is_empty());

    Ok(())
}
