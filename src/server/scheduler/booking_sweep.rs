//! Periodic booking maintenance.
//!
//! One sweep completes bookings that have ended, sends due reminders and drops idle slot
//! locks. The cron job and the admin trigger share a [`BookingSweeper`], whose gate
//! keeps two sweeps from overlapping. Once closed, the sweeper skips every later run.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::booking::SweepReportDto,
    server::{
        error::AppError,
        model::time_window::VenueTime,
        service::{
            booking::BookingService,
            mail::MailSender,
            notification::{NotificationService, SweepReport},
        },
        util::slot_lock::SlotLocks,
    },
};

/// Result of one full sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepRun {
    /// Bookings moved from active to completed.
    pub promoted: u64,
    pub reminders: SweepReport,
}

impl SweepRun {
    pub fn into_dto(self) -> SweepReportDto {
        SweepReportDto {
            promoted: self.promoted,
            due: self.reminders.due,
            sent: self.reminders.sent,
            failed: self.reminders.failed,
            skipped: self.reminders.skipped,
        }
    }
}

#[derive(Clone)]
pub struct BookingSweeper {
    db: DatabaseConnection,
    mail_sender: Arc<dyn MailSender>,
    slot_locks: SlotLocks,
    venue: VenueTime,
    reminder_lead: TimeDelta,
    gate: Arc<Mutex<()>>,
    closed: Arc<AtomicBool>,
}

impl BookingSweeper {
    pub fn new(
        db: DatabaseConnection,
        mail_sender: Arc<dyn MailSender>,
        slot_locks: SlotLocks,
        venue: VenueTime,
        reminder_lead: TimeDelta,
    ) -> Self {
        Self {
            db,
            mail_sender,
            slot_locks,
            venue,
            reminder_lead,
            gate: Arc::new(Mutex::new(())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runs one sweep, waiting for any sweep already in progress.
    ///
    /// A failed promotion is logged and the reminder step still runs. After
    /// [`close`](Self::close) this returns empty counts without touching the store.
    ///
    /// # Arguments
    /// - `now` - Instant used for promotion and the reminder cutoff
    ///
    /// # Returns
    /// - `Ok(SweepRun)` - Counts for both steps
    /// - `Err(AppError)` - The reminder query failed
    pub async fn run(&self, now: DateTime<Utc>) -> Result<SweepRun, AppError> {
        let _running = self.gate.lock().await;

        if self.closed.load(Ordering::SeqCst) {
            tracing::debug!("Booking sweeper closed, skipping run");
            return Ok(SweepRun::default());
        }

        let promoted = match BookingService::new(&self.db, &self.slot_locks, self.venue)
            .promote_expired(now)
            .await
        {
            Ok(promoted) => promoted,
            Err(e) => {
                tracing::error!("Failed to complete expired bookings: {}", e);
                0
            }
        };

        let reminders = NotificationService::new(
            &self.db,
            self.mail_sender.as_ref(),
            self.venue,
            self.reminder_lead,
        )
        .sweep(now)
        .await;

        let pruned = self.slot_locks.prune();
        if pruned > 0 {
            tracing::debug!("Pruned {} idle slot locks", pruned);
        }

        Ok(SweepRun {
            promoted,
            reminders: reminders?,
        })
    }

    /// Stops the sweeper for shutdown.
    ///
    /// Waits for a sweep in progress to finish. Jobs already spawned by the scheduler
    /// that reach the gate afterwards see the closed flag and do nothing.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let _idle = self.gate.lock().await;
    }
}

/// Starts the booking sweep scheduler.
///
/// # Arguments
/// - `sweeper` - Shared sweeper, also used by the admin trigger
/// - `schedule` - Cron expression with a seconds field, e.g. `0 * * * * *`
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(
    sweeper: BookingSweeper,
    schedule: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let sweeper = sweeper.clone();

        Box::pin(async move {
            if let Err(e) = sweeper.run(Utc::now()).await {
                tracing::error!("Error running booking sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking sweep scheduler started ({})", schedule);

    Ok(scheduler)
}
