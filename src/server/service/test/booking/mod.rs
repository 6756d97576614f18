use super::{at, booking_request, caller_for};
use crate::server::{
    error::AppError,
    model::{booking::BookingStatus, time_window::VenueTime},
    service::booking::BookingService,
    util::slot_lock::SlotLocks,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::booking::BookingFactory};

mod cancel;
mod create;
mod list;
