//! Booking lifecycle: creation, cancellation, listing and time-based completion.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, court::CourtRepository},
    error::AppError,
    model::{
        booking::{Booking, BookingStatus, CreateBookingParams, NewBooking},
        time_window::VenueTime,
        user::Caller,
    },
    service::availability::AvailabilityService,
    util::slot_lock::SlotLocks,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    slot_locks: &'a SlotLocks,
    venue: VenueTime,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, slot_locks: &'a SlotLocks, venue: VenueTime) -> Self {
        Self {
            db,
            slot_locks,
            venue,
        }
    }

    /// Creates a booking for the caller.
    ///
    /// Validation runs in order and stops at the first failure: formats, future start,
    /// end after start, maximum duration, court exists and is active, no overlapping
    /// active booking. The court re-read, the conflict check and the insert run while
    /// holding the slot lock for the court and date, each as its own autocommit
    /// statement. Creates for other courts or dates run concurrently.
    ///
    /// # Arguments
    /// - `caller` - Authenticated owner of the new booking
    /// - `params` - Court number plus date and time strings from the request
    /// - `now` - Current instant used for the future-only rule and timestamps
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored active booking
    /// - `Err(AppError::Validation)` - Malformed input, past start, bad window, inactive court
    /// - `Err(AppError::NotFound)` - Unknown court number
    /// - `Err(AppError::Conflict)` - Window overlaps an active booking
    pub async fn create(
        &self,
        caller: &Caller,
        params: CreateBookingParams,
        now: DateTime<Utc>,
    ) -> Result<Booking, AppError> {
        let slot = self
            .venue
            .parse_slot(&params.booking_date, &params.start_time, &params.end_time)?;
        slot.ensure_bookable(now)?;

        let court = CourtRepository::new(self.db)
            .find_by_court_number(params.court_number)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Court {} not found", params.court_number))
            })?;
        if !court.is_active {
            return Err(court_inactive(court.court_number));
        }

        let _slot_guard = self.slot_locks.acquire(court.court_number, slot.date).await;

        // Court may have been deactivated while waiting on the lock
        let court = CourtRepository::new(self.db)
            .find_by_id(court.id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| court_inactive(court.court_number))?;

        if !AvailabilityService::new(self.db)
            .is_slot_free(court.court_number, &slot)
            .await?
        {
            return Err(AppError::Conflict(
                "Court is already booked for the requested time".to_string(),
            ));
        }

        let created = BookingRepository::new(self.db)
            .create(
                NewBooking {
                    user_id: caller.user_id,
                    student_id: caller.student_id.clone(),
                    user_email: caller.email.clone(),
                    court_id: court.id,
                    court_number: court.court_number,
                    booking_date: slot.date,
                    window: slot.window,
                },
                now,
            )
            .await?;

        tracing::info!(
            "Booking {} created by {} for court {} on {}",
            created.id,
            caller.student_id,
            created.court_number,
            created.booking_date
        );

        Booking::from_entity(created)
    }

    /// Cancels a booking on behalf of its owner or an admin.
    ///
    /// # Returns
    /// - `Ok(())` - Booking is now cancelled
    /// - `Err(AppError::NotFound)` - No booking with this ID
    /// - `Err(AppError::Forbidden)` - Caller is neither the owner nor an admin
    /// - `Err(AppError::Validation)` - Booking was already cancelled
    pub async fn cancel(
        &self,
        caller: &Caller,
        booking_id: i32,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        let booking = Booking::from_entity(booking)?;

        if !booking.can_be_cancelled_by(caller) {
            return Err(AppError::Forbidden(
                "You do not have permission to cancel this booking".to_string(),
            ));
        }
        // A concurrent cancel can land between the read and the update.
        if booking.status == BookingStatus::Cancelled || !repo.cancel(booking_id, now).await? {
            return Err(AppError::Validation(
                "Booking is already cancelled".to_string(),
            ));
        }

        tracing::info!("Booking {} cancelled by {}", booking_id, caller.student_id);

        Ok(())
    }

    /// Gets the caller's bookings after completing any that have ended.
    ///
    /// A failed promotion is logged and does not fail the listing.
    pub async fn list_for_caller(
        &self,
        caller: &Caller,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, AppError> {
        self.promote_before_listing(now).await;

        let bookings = BookingRepository::new(self.db)
            .find_by_owner(&caller.student_id)
            .await?;

        bookings.into_iter().map(Booking::from_entity).collect()
    }

    /// Gets every booking, newest first, after completing any that have ended.
    pub async fn list_all(&self, now: DateTime<Utc>) -> Result<Vec<Booking>, AppError> {
        self.promote_before_listing(now).await;

        let bookings = BookingRepository::new(self.db).find_all().await?;

        bookings.into_iter().map(Booking::from_entity).collect()
    }

    /// Moves active bookings whose end time is before `now` to completed.
    ///
    /// Shared by the listing endpoints and the scheduled sweep. Safe to call repeatedly.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bookings promoted by this call
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn promote_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let promoted = BookingRepository::new(self.db).promote_expired(now).await?;

        if promoted > 0 {
            tracing::info!("Marked {} expired bookings as completed", promoted);
        }

        Ok(promoted)
    }

    async fn promote_before_listing(&self, now: DateTime<Utc>) {
        if let Err(e) = self.promote_expired(now).await {
            tracing::warn!("Failed to complete expired bookings before listing: {}", e);
        }
    }
}

fn court_inactive(court_number: i32) -> AppError {
    AppError::Validation(format!("Court {} is not available for booking", court_number))
}
