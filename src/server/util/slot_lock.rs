//! Per-slot async locks serializing booking creation.
//!
//! Creating a booking is a check-then-insert. Two requests for the same court and day
//! take the same lock, so the second one re-runs the conflict count only after the
//! first has committed.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type SlotKey = (i32, NaiveDate);

/// Table of async mutexes keyed by court number and venue-local date.
///
/// Cloning shares the same table. Entries are created on demand and removed by
/// [`SlotLocks::prune`] once nobody holds or waits on them.
#[derive(Clone, Default)]
pub struct SlotLocks {
    slots: Arc<DashMap<SlotKey, Arc<Mutex<()>>>>,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a court's bookings on one date.
    ///
    /// The map shard is released before awaiting, so waiting on one slot never
    /// blocks other slots.
    ///
    /// # Arguments
    /// - `court_number` - Court being booked
    /// - `date` - Venue-local day of the booking
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Held until dropped
    pub async fn acquire(&self, court_number: i32, date: NaiveDate) -> OwnedMutexGuard<()> {
        let slot = self
            .slots
            .entry((court_number, date))
            .or_default()
            .value()
            .clone();

        slot.lock_owned().await
    }

    /// Removes entries that no request holds or waits on.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub fn prune(&self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        before.saturating_sub(self.slots.len())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
