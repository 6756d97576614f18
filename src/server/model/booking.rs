//! Booking domain models and parameters.
//!
//! A booking moves forward through a small lifecycle: `active` to `cancelled` when
//! its owner or an admin cancels it, or `active` to `completed` once its end time has
//! passed. The stored status string is parsed into [`BookingStatus`] when a row is
//! lifted into the domain.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::booking::{BookingDto, CourtAvailabilityDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, AppError},
        model::{
            time_window::{TimeWindow, VenueTime, DATE_FORMAT},
            user::Caller,
        },
    },
};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Holds the slot; the only status that blocks other bookings.
    Active,
    /// Cancelled by the owner or an admin.
    Cancelled,
    /// End time has passed.
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation of one court for a window on a venue-local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    /// Owner's student ID, denormalized for ownership checks and reminder lookups.
    pub student_id: String,
    pub court_id: i32,
    pub court_number: i32,
    pub booking_date: NaiveDate,
    pub window: TimeWindow,
    pub status: BookingStatus,
    pub notification_sent: bool,
    /// Owner's email at creation time, used when the directory lookup fails.
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(AppError::InternalErr(UnknownBookingStatus))` - Stored status is not recognized
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status =
            BookingStatus::parse(&entity.status).ok_or(InternalError::UnknownBookingStatus {
                booking_id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            student_id: entity.student_id,
            court_id: entity.court_id,
            court_number: entity.court_number,
            booking_date: entity.booking_date,
            window: TimeWindow::new(entity.start_time, entity.end_time),
            status,
            notification_sent: entity.notification_sent,
            user_email: entity.user_email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// True when the caller owns the booking or is an admin.
    pub fn can_be_cancelled_by(&self, caller: &Caller) -> bool {
        caller.is_admin() || self.student_id == caller.student_id
    }

    /// Projects the booking for API responses with venue-local date and time strings.
    pub fn into_dto(self, venue: &VenueTime) -> BookingDto {
        BookingDto {
            id: self.id,
            court_number: self.court_number,
            booking_date: self.booking_date.format(DATE_FORMAT).to_string(),
            start_time: venue.format_time(self.window.start),
            end_time: venue.format_time(self.window.end),
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Row values for inserting a new active booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub student_id: String,
    pub user_email: Option<String>,
    pub court_id: i32,
    pub court_number: i32,
    pub booking_date: NaiveDate,
    pub window: TimeWindow,
}

/// Raw booking request as received at the API boundary.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub court_number: i32,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            court_number: dto.court_number,
            booking_date: dto.booking_date,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}

/// Availability of one active court for a requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtAvailability {
    pub court_number: i32,
    pub is_available: bool,
}

impl CourtAvailability {
    pub fn into_dto(self) -> CourtAvailabilityDto {
        CourtAvailabilityDto {
            court_number: self.court_number,
            is_available: self.is_available,
        }
    }
}
