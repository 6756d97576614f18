//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `SlotLocks` shares one lock table behind an `Arc`
//! - `BookingSweeper` shares its mail sender and run gate behind `Arc`s

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Environment, model::time_window::VenueTime,
    scheduler::booking_sweep::BookingSweeper, service::booking::BookingService,
    util::slot_lock::SlotLocks,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Locks serializing booking creation per court and date.
    pub slot_locks: SlotLocks,

    /// Sweep shared with the scheduler, used by the admin trigger.
    pub sweeper: BookingSweeper,

    /// Venue clock used to read request dates and times.
    pub venue: VenueTime,

    pub environment: Environment,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `slot_locks` - Lock table, the same instance the sweeper prunes
    /// - `sweeper` - Booking sweep shared with the scheduler
    /// - `venue` - Venue clock
    /// - `environment` - Deployment environment reported by the health check
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        slot_locks: SlotLocks,
        sweeper: BookingSweeper,
        venue: VenueTime,
        environment: Environment,
    ) -> Self {
        Self {
            db,
            slot_locks,
            sweeper,
            venue,
            environment,
        }
    }

    /// Booking service bound to this state's storage, locks and venue clock.
    pub fn booking_service(&self) -> BookingService<'_> {
        BookingService::new(&self.db, &self.slot_locks, self.venue)
    }
}
