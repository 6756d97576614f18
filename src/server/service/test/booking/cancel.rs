use super::*;

/// Tests the owner cancelling their booking.
///
/// Expected: Ok with the stored status cancelled
#[tokio::test]
async fn owner_cancels_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user, &court).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());

    service
        .cancel(&caller_for(&user), booking.id, at(1, 8, 0))
        .await?;

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "cancelled");

    Ok(())
}

/// Tests cancellation by another regular user.
///
/// Expected: Err(Forbidden) and the booking stays active
#[tokio::test]
async fn non_owner_cannot_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, court) = factory::helpers::create_booking_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &owner, &court).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());

    let result = service
        .cancel(&caller_for(&stranger), booking.id, at(1, 8, 0))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "active");

    Ok(())
}

/// Tests cancellation by an admin who does not own the booking.
///
/// Expected: Ok
#[tokio::test]
async fn admin_cancels_any_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, court) = factory::helpers::create_booking_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let booking = factory::create_booking(db, &owner, &court).await?;
    let locks = SlotLocks::new();

    let result = BookingService::new(db, &locks, VenueTime::default())
        .cancel(&caller_for(&admin), booking.id, at(1, 8, 0))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests cancelling the same booking twice.
///
/// Expected: second call Err(Validation)
#[tokio::test]
async fn cancelling_twice_fails_validation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user, &court).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let caller = caller_for(&user);

    service.cancel(&caller, booking.id, at(1, 8, 0)).await?;
    let second = service.cancel(&caller, booking.id, at(1, 8, 1)).await;

    assert!(matches!(second, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests two concurrent cancels of one booking by its owner over a pooled on-disk
/// database.
///
/// Expected: exactly one Ok and one Err(Validation), status cancelled
#[tokio::test]
async fn concurrent_cancels_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .on_disk()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user, &court).await?;
    let locks = SlotLocks::new();
    let service = BookingService::new(db, &locks, VenueTime::default());
    let caller = caller_for(&user);

    let (a, b) = tokio::join!(
        service.cancel(&caller, booking.id, at(1, 8, 0)),
        service.cancel(&caller, booking.id, at(1, 8, 0)),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    let rejected = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(AppError::Validation(_))))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(rejected, 1);

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "cancelled");

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let locks = SlotLocks::new();

    let result = BookingService::new(db, &locks, VenueTime::default())
        .cancel(&caller_for(&user), 404, at(1, 8, 0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
