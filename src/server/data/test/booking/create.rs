use super::*;

/// Tests creating a booking from repository parameters.
///
/// Verifies that the stored row is active, not yet notified, and carries the
/// denormalized owner and court fields.
///
/// Expected: Ok with booking persisted as active
#[tokio::test]
async fn creates_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, court) = factory::helpers::create_booking_dependencies(db).await?;
    let window = TimeWindow::new(at(10, 0), at(11, 0));

    let repo = BookingRepository::new(db);
    let created = repo
        .create(
            NewBooking {
                user_id: user.id,
                student_id: user.student_id.clone(),
                user_email: user.email.clone(),
                court_id: court.id,
                court_number: court.court_number,
                booking_date: window.start.date_naive(),
                window,
            },
            at(8, 0),
        )
        .await?;

    assert_eq!(created.status, "active");
    assert!(!created.notification_sent);
    assert_eq!(created.student_id, user.student_id);
    assert_eq!(created.court_number, court.court_number);
    assert_eq!(created.start_time, at(10, 0));
    assert_eq!(created.end_time, at(11, 0));
    assert_eq!(created.user_email, user.email);

    let stored = entity::prelude::Booking::find_by_id(created.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests that creating a booking for a missing court fails.
///
/// Verifies that the court foreign key is enforced by the schema.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_court() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let window = TimeWindow::new(at(10, 0), at(11, 0));

    let result = BookingRepository::new(db)
        .create(
            NewBooking {
                user_id: user.id,
                student_id: user.student_id,
                user_email: None,
                court_id: 9999,
                court_number: 9999,
                booking_date: window.start.date_naive(),
                window,
            },
            at(8, 0),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
