use super::*;
use std::collections::HashMap;

/// Tests promotion of active bookings that have ended.
///
/// Verifies that only active bookings with `end < now` become completed, a booking
/// ending exactly at `now` stays active, and cancelled bookings are untouched.
///
/// Expected: Ok(1) and statuses as described
#[tokio::test]
async fn promotes_only_ended_active_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let ended = BookingFactory::new(db, &user, &court)
        .window(at(8, 0), at(9, 0))
        .build()
        .await?;
    let ends_now = BookingFactory::new(db, &user, &court)
        .window(at(9, 0), at(10, 0))
        .build()
        .await?;
    let cancelled = BookingFactory::new(db, &user, &court)
        .window(at(7, 0), at(8, 0))
        .status("cancelled")
        .build()
        .await?;
    let upcoming = BookingFactory::new(db, &user, &court)
        .window(at(11, 0), at(12, 0))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let promoted = repo.promote_expired(at(10, 0)).await?;

    assert_eq!(promoted, 1);
    let statuses: HashMap<i32, String> = repo
        .find_all()
        .await?
        .into_iter()
        .map(|b| (b.id, b.status))
        .collect();
    assert_eq!(statuses[&ended.id], "completed");
    assert_eq!(statuses[&ends_now.id], "active");
    assert_eq!(statuses[&cancelled.id], "cancelled");
    assert_eq!(statuses[&upcoming.id], "active");

    Ok(())
}

/// Tests that promotion is repeatable.
///
/// Expected: second run promotes nothing and no active booking has ended
#[tokio::test]
async fn promotion_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    for hour in [6, 7, 8] {
        BookingFactory::new(db, &user, &court)
            .window(at(hour, 0), at(hour + 1, 0))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let now = at(12, 0);

    assert_eq!(repo.promote_expired(now).await?, 3);
    assert_eq!(repo.promote_expired(now).await?, 0);

    let still_active = repo
        .find_all()
        .await?
        .into_iter()
        .filter(|b| b.status == "active" && b.end_time < now)
        .count();
    assert_eq!(still_active, 0);

    Ok(())
}
