//! Booking time windows and venue-local clock handling.
//!
//! Requests carry a calendar date plus `HH:MM` start and end strings. These are composed
//! into absolute UTC instants using the venue's fixed offset, validated against the
//! booking rules, and compared with the half-open overlap predicate.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Utc};

use crate::server::error::AppError;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Longest reservation a single booking may cover, in minutes.
pub const MAX_BOOKING_MINUTES: i64 = 120;

/// Half-open interval `[start, end)` between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns true unless one window ends at or before the other begins.
    ///
    /// Covers a window starting inside, ending inside, or containing the other.
    /// Back-to-back windows (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// The venue's wall clock, a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueTime {
    offset: FixedOffset,
}

impl Default for VenueTime {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl VenueTime {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Composes a venue-local date and time of day into an absolute instant.
    pub fn instant(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        let local = date.and_time(time);
        (local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()))).and_utc()
    }

    /// Venue-local wall clock reading of an instant.
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        self.local(instant).format(DATE_FORMAT).to_string()
    }

    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        self.local(instant).format(TIME_FORMAT).to_string()
    }

    /// Parses request strings into a slot on the venue clock.
    ///
    /// Only the formats are checked here; ordering and booking rules are applied by
    /// [`BookingSlot::ensure_ordered`] and [`BookingSlot::ensure_bookable`].
    ///
    /// # Arguments
    /// - `date` - Calendar day, `YYYY-MM-DD`
    /// - `start` - Start time of day, `HH:MM`
    /// - `end` - End time of day, `HH:MM`
    ///
    /// # Returns
    /// - `Ok(BookingSlot)` - Date and absolute window
    /// - `Err(AppError::Validation)` - Malformed date or time
    pub fn parse_slot(&self, date: &str, start: &str, end: &str) -> Result<BookingSlot, AppError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
            AppError::Validation("Invalid date format, expected YYYY-MM-DD".to_string())
        })?;
        let start = parse_time_of_day(start, "start")?;
        let end = parse_time_of_day(end, "end")?;

        Ok(BookingSlot {
            date,
            window: TimeWindow::new(self.instant(date, start), self.instant(date, end)),
        })
    }
}

fn parse_time_of_day(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
        AppError::Validation(format!("Invalid {} time format, expected HH:MM", field))
    })
}

/// A requested window anchored to the venue-local calendar day it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSlot {
    pub date: NaiveDate,
    pub window: TimeWindow,
}

impl BookingSlot {
    /// Rejects windows whose end is not after their start.
    pub fn ensure_ordered(&self) -> Result<(), AppError> {
        if self.window.end <= self.window.start {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies the creation rules in order: future start, ordering, maximum duration.
    ///
    /// # Arguments
    /// - `now` - Current instant; the start must be strictly after it
    ///
    /// # Returns
    /// - `Ok(())` - The slot may be booked, subject to court and conflict checks
    /// - `Err(AppError::Validation)` - First rule the slot breaks
    pub fn ensure_bookable(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        if self.window.start <= now {
            return Err(AppError::Validation(
                "Booking must be in the future".to_string(),
            ));
        }
        self.ensure_ordered()?;
        if self.window.duration() > TimeDelta::minutes(MAX_BOOKING_MINUTES) {
            return Err(AppError::Validation(
                "Booking duration exceeds the maximum of 2 hours".to_string(),
            ));
        }
        Ok(())
    }
}
