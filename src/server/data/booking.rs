//! Booking data repository.
//!
//! Holds every query the availability engine, the lifecycle service and the
//! notification sweep issue against the booking table.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    booking::{BookingStatus, NewBooking},
    time_window::TimeWindow,
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository over any SeaORM connection.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active, not yet notified booking.
    ///
    /// # Arguments
    /// - `params` - Owner, court and window of the booking
    /// - `now` - Timestamp recorded as created and updated time
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored booking with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: NewBooking,
        now: DateTime<Utc>,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            student_id: ActiveValue::Set(params.student_id),
            court_id: ActiveValue::Set(params.court_id),
            court_number: ActiveValue::Set(params.court_number),
            booking_date: ActiveValue::Set(params.booking_date),
            start_time: ActiveValue::Set(params.window.start),
            end_time: ActiveValue::Set(params.window.end),
            status: ActiveValue::Set(BookingStatus::Active.as_str().to_string()),
            notification_sent: ActiveValue::Set(false),
            user_email: ActiveValue::Set(params.user_email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Gets every booking owned by a student, newest date first then latest start first.
    pub async fn find_by_owner(
        &self,
        student_id: &str,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::StudentId.eq(student_id))
            .order_by_desc(entity::booking::Column::BookingDate)
            .order_by_desc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Gets every booking in the system, newest first.
    pub async fn find_all(&self) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_desc(entity::booking::Column::BookingDate)
            .order_by_desc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Counts active bookings on a court and date whose window overlaps the given one.
    ///
    /// Uses the half-open overlap test `start < window.end AND end > window.start`, so
    /// back-to-back bookings are not counted. Cancelled and completed bookings never
    /// block.
    ///
    /// # Arguments
    /// - `court_number` - Court to check
    /// - `date` - Venue-local day the window falls on
    /// - `window` - Requested window
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of conflicting active bookings
    /// - `Err(DbErr)` - Database error during the count
    pub async fn count_conflicting(
        &self,
        court_number: i32,
        date: NaiveDate,
        window: &TimeWindow,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CourtNumber.eq(court_number))
            .filter(entity::booking::Column::BookingDate.eq(date))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::StartTime.lt(window.end))
            .filter(entity::booking::Column::EndTime.gt(window.start))
            .count(self.db)
            .await
    }

    /// Marks a booking cancelled unless it already is.
    ///
    /// Of two racing calls for the same booking only one sees its row change.
    ///
    /// # Returns
    /// - `Ok(true)` - The row moved to the cancelled status
    /// - `Ok(false)` - No booking with this ID, or it was already cancelled
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves every active booking whose end time is before `now` to completed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings promoted; zero on a repeated call
    /// - `Err(DbErr)` - Database error during update
    pub async fn promote_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed.as_str()),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::EndTime.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets active bookings starting at or before `cutoff` that have not been reminded.
    ///
    /// Ordered by start time so the earliest reminders go out first.
    pub async fn find_due_for_notification(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::NotificationSent.eq(false))
            .filter(entity::booking::Column::StartTime.lte(cutoff))
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Sets the notification flag if it is still unset.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag flipped by this call
    /// - `Ok(false)` - Booking missing or already marked
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_notified(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::NotificationSent, Expr::value(true))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::NotificationSent.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
