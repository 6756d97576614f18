//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly, bypassing the lifecycle rules, so tests can seed past,
//! cancelled or already notified reservations.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings owned by a user on a court.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    student_id: String,
    user_email: Option<String>,
    court_id: i32,
    court_number: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    notification_sent: bool,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - window: one hour starting one day from now (UTC)
    /// - status: `"active"`
    /// - notification_sent: `false`
    pub fn new(
        db: &'a DatabaseConnection,
        user: &entity::user::Model,
        court: &entity::court::Model,
    ) -> Self {
        let start_time = Utc::now() + Duration::days(1);
        Self {
            db,
            user_id: user.id,
            student_id: user.student_id.clone(),
            user_email: user.email.clone(),
            court_id: court.id,
            court_number: court.court_number,
            start_time,
            end_time: start_time + Duration::hours(1),
            status: "active".to_string(),
            notification_sent: false,
        }
    }

    /// Sets the start and end instants. The booking date is derived from `start` in UTC.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn notification_sent(mut self, notification_sent: bool) -> Self {
        self.notification_sent = notification_sent;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            student_id: ActiveValue::Set(self.student_id),
            court_id: ActiveValue::Set(self.court_id),
            court_number: ActiveValue::Set(self.court_number),
            booking_date: ActiveValue::Set(self.start_time.date_naive()),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            notification_sent: ActiveValue::Set(self.notification_sent),
            user_email: ActiveValue::Set(self.user_email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active one hour booking starting one day from now.
pub async fn create_booking(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    court: &entity::court::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user, court).build().await
}
