use super::*;

/// Tests that listing completes ended bookings first.
///
/// Expected: ended booking reported completed, upcoming booking active, newest first
#[tokio::test]
async fn list_for_caller_promotes_expired_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let ended = BookingFactory::new(db, &user, &court)
        .window(at(1, 8, 0), at(1, 9, 0))
        .build()
        .await?;
    let upcoming = BookingFactory::new(db, &user, &court)
        .window(at(2, 8, 0), at(2, 9, 0))
        .build()
        .await?;
    BookingFactory::new(db, &other, &court)
        .window(at(1, 12, 0), at(1, 13, 0))
        .build()
        .await?;

    let locks = SlotLocks::new();
    let bookings = BookingService::new(db, &locks, VenueTime::default())
        .list_for_caller(&caller_for(&user), at(1, 10, 0))
        .await?;

    let summary: Vec<(i32, BookingStatus)> = bookings.iter().map(|b| (b.id, b.status)).collect();
    assert_eq!(
        summary,
        vec![
            (upcoming.id, BookingStatus::Active),
            (ended.id, BookingStatus::Completed)
        ]
    );

    Ok(())
}

/// Tests that promotion leaves no ended active booking and is idempotent.
///
/// Expected: first call promotes both, second promotes none
#[tokio::test]
async fn promote_expired_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    for hour in [7, 8] {
        BookingFactory::new(db, &user, &court)
            .window(at(1, hour, 0), at(1, hour + 1, 0))
            .build()
            .await?;
    }

    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let now = at(1, 12, 0);

    assert_eq!(service.promote_expired(now).await?, 2);
    assert_eq!(service.promote_expired(now).await?, 0);

    let all = service.list_all(now).await?;
    assert!(all
        .iter()
        .all(|b| b.status != BookingStatus::Active || b.window.end >= now));

    Ok(())
}
