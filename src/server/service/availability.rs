//! Availability engine.
//!
//! Decides whether a window on a court is free by counting overlapping active bookings.
//! The booking service re-runs the same check under the slot lock before inserting.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{booking::BookingRepository, court::CourtRepository},
    error::AppError,
    model::{booking::CourtAvailability, time_window::BookingSlot},
};

pub struct AvailabilityService<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether one court can be booked for a slot.
    ///
    /// # Arguments
    /// - `court_number` - Court to check
    /// - `slot` - Requested date and window
    ///
    /// # Returns
    /// - `Ok(true)` - Court is active and has no overlapping active booking
    /// - `Ok(false)` - Court is inactive or the window is taken
    /// - `Err(AppError::NotFound)` - No court with this number
    pub async fn check_available(
        &self,
        court_number: i32,
        slot: &BookingSlot,
    ) -> Result<bool, AppError> {
        let court = CourtRepository::new(self.db)
            .find_by_court_number(court_number)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Court {} not found", court_number)))?;

        if !court.is_active {
            return Ok(false);
        }

        self.is_slot_free(court_number, slot).await
    }

    /// Conflict check alone, without looking at the court record.
    pub async fn is_slot_free(&self, court_number: i32, slot: &BookingSlot) -> Result<bool, AppError> {
        let conflicts = BookingRepository::new(self.db)
            .count_conflicting(court_number, slot.date, &slot.window)
            .await?;

        Ok(conflicts == 0)
    }

    /// Availability of every active court for a slot, ascending by court number.
    pub async fn availability_for_all_active_courts(
        &self,
        slot: &BookingSlot,
    ) -> Result<Vec<CourtAvailability>, AppError> {
        let courts = CourtRepository::new(self.db).find_active().await?;

        let mut availability = Vec::with_capacity(courts.len());
        for court in courts {
            availability.push(CourtAvailability {
                court_number: court.court_number,
                is_available: self.is_slot_free(court.court_number, slot).await?,
            });
        }

        Ok(availability)
    }
}
