use crate::server::{
    data::booking::BookingRepository,
    model::{booking::NewBooking, time_window::TimeWindow},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

mod create;
mod find_by_owner;
mod mark_notified;
mod promote_expired;

/// Instant on 2025-06-01 at the given UTC wall clock time.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0)
        .single()
        .unwrap()
}
