use super::*;

/// Tests creating a valid booking.
///
/// Expected: Ok(Booking) active, not notified, with the requested window
#[tokio::test]
async fn creates_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::court::create_court_with_number(db, 3).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());

    let booking = service
        .create(
            &caller_for(&user),
            booking_request(3, "2025-06-01", "10:00", "11:00"),
            at(1, 8, 0),
        )
        .await?;

    assert_eq!(booking.status, BookingStatus::Active);
    assert!(!booking.notification_sent);
    assert_eq!(booking.court_number, 3);
    assert_eq!(booking.student_id, user.student_id);
    assert_eq!(booking.user_email, user.email);
    assert_eq!(booking.window.start, at(1, 10, 0));
    assert_eq!(booking.window.end, at(1, 11, 0));

    let dto = booking.into_dto(&VenueTime::default());
    assert_eq!(dto.booking_date, "2025-06-01");
    assert_eq!(dto.start_time, "10:00");
    assert_eq!(dto.end_time, "11:00");

    Ok(())
}

/// Tests sequential overlapping creates on one court.
///
/// Expected: first Ok, second Err(Conflict), back-to-back Ok
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::court::create_court_with_number(db, 3).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let now = at(1, 8, 0);

    service
        .create(
            &caller_for(&first),
            booking_request(3, "2025-06-01", "10:00", "11:00"),
            now,
        )
        .await?;

    let overlapping = service
        .create(
            &caller_for(&second),
            booking_request(3, "2025-06-01", "10:30", "11:30"),
            now,
        )
        .await;
    assert!(matches!(overlapping, Err(AppError::Conflict(_))));

    let adjacent = service
        .create(
            &caller_for(&second),
            booking_request(3, "2025-06-01", "11:00", "12:00"),
            now,
        )
        .await;
    assert!(adjacent.is_ok());

    Ok(())
}

/// Tests concurrent overlapping creates on one court.
///
/// Both requests pass validation before either inserts; the slot lock serializes
/// the conflict check and insert.
///
/// Expected: exactly one Ok and one Err(Conflict)
#[tokio::test]
async fn concurrent_overlapping_creates_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::court::create_court_with_number(db, 3).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let now = at(1, 8, 0);
    let (first_caller, second_caller) = (caller_for(&first), caller_for(&second));

    let (a, b) = tokio::join!(
        service.create(
            &first_caller,
            booking_request(3, "2025-06-01", "10:00", "11:00"),
            now,
        ),
        service.create(
            &second_caller,
            booking_request(3, "2025-06-01", "10:30", "11:30"),
            now,
        ),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    let conflicts = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 1);

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests concurrent creates for the same window on two different courts over a
/// pooled on-disk database.
///
/// Each create runs on its own connection and neither waits on the other's lock.
///
/// Expected: both Ok, two stored bookings
#[tokio::test]
async fn concurrent_creates_on_different_courts_both_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .on_disk()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::court::create_court_with_number(db, 3).await?;
    factory::court::create_court_with_number(db, 4).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let now = at(1, 8, 0);
    let (first_caller, second_caller) = (caller_for(&first), caller_for(&second));

    let (a, b) = tokio::join!(
        service.create(
            &first_caller,
            booking_request(3, "2025-06-01", "10:00", "11:00"),
            now,
        ),
        service.create(
            &second_caller,
            booking_request(4, "2025-06-01", "10:00", "11:00"),
            now,
        ),
    );

    assert_eq!(a?.court_number, 3);
    assert_eq!(b?.court_number, 4);

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert_eq!(stored.len(), 2);

    Ok(())
}

/// Tests the validation pipeline rules.
///
/// Expected: Err(Validation) for too long, past start, reversed window and bad format
#[tokio::test]
async fn rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::court::create_court_with_number(db, 3).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let caller = caller_for(&user);
    let now = at(1, 8, 0);

    for (date, start, end) in [
        ("2025-06-01", "09:00", "11:30"),
        ("2025-06-01", "07:00", "08:00"),
        ("2025-06-01", "11:00", "10:00"),
        ("01-06-2025", "10:00", "11:00"),
        ("2025-06-01", "10", "11:00"),
    ] {
        let result = service
            .create(&caller, booking_request(3, date, start, end), now)
            .await;
        assert!(
            matches!(result, Err(AppError::Validation(_))),
            "{} {}-{} should fail validation",
            date,
            start,
            end
        );
    }

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests unknown and inactive courts.
///
/// Expected: Err(NotFound) for unknown, Err(Validation) for inactive
#[tokio::test]
async fn rejects_unknown_and_inactive_courts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::court::CourtFactory::new(db)
        .court_number(2)
        .active(false)
        .build()
        .await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let caller = caller_for(&user);
    let now = at(1, 8, 0);

    let unknown = service
        .create(&caller, booking_request(9, "2025-06-01", "10:00", "11:00"), now)
        .await;
    let inactive = service
        .create(&caller, booking_request(2, "2025-06-01", "10:00", "11:00"), now)
        .await;

    assert!(matches!(unknown, Err(AppError::NotFound(_))));
    assert!(matches!(inactive, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a cancelled booking frees its window.
///
/// Expected: Ok for a new booking over a cancelled one
#[tokio::test]
async fn cancelled_booking_does_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::court::create_court_with_number(db, 3).await?;
    BookingFactory::new(db, &user, &court)
        .window(at(1, 10, 0), at(1, 11, 0))
        .status("cancelled")
        .build()
        .await?;

    let locks = SlotLocks::new();
    let result = BookingService::new(db, &locks, VenueTime::default())
        .create(
            &caller_for(&user),
            booking_request(3, "2025-06-01", "10:00", "11:00"),
            at(1, 8, 0),
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}
