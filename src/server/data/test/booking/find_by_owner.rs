use super::*;

/// Tests owner listing order.
///
/// Verifies bookings are ordered by date descending, then start time descending,
/// and that other students' bookings are excluded.
///
/// Expected: Ok with the owner's three bookings, latest first
#[tokio::test]
async fn returns_owner_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, court) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let early = BookingFactory::new(db, &owner, &court)
        .window(at(8, 0), at(9, 0))
        .build()
        .await?;
    let late = BookingFactory::new(db, &owner, &court)
        .window(at(15, 0), at(16, 0))
        .build()
        .await?;
    let next_day = BookingFactory::new(db, &owner, &court)
        .window(at(8, 0) + Duration::days(1), at(9, 0) + Duration::days(1))
        .build()
        .await?;
    BookingFactory::new(db, &other, &court)
        .window(at(12, 0), at(13, 0))
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .find_by_owner(&owner.student_id)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![next_day.id, late.id, early.id]);

    Ok(())
}

/// Tests listing for a student without bookings.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_student_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bookings = BookingRepository::new(db).find_by_owner("nobody").await?;

    assert!(bookings.is_empty());

    Ok(())
}
