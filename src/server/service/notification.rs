//! Reminder sweep for upcoming bookings.
//!
//! Each run finds active bookings starting within the reminder lead that have not been
//! reminded, emails their owners, and marks a booking notified only after its message
//! was accepted. Failures are logged per booking and never abort the run.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, user::UserRepository},
    error::AppError,
    model::{booking::Booking, time_window::VenueTime, time_window::DATE_FORMAT},
    service::mail::MailSender,
};

pub const REMINDER_SUBJECT: &str = "Upcoming Booking Reminder";

/// Counts of what one sweep did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Bookings matched by the due query.
    pub due: usize,
    /// Reminders accepted by the mail sender.
    pub sent: usize,
    /// Dispatch failures, left due for the next run.
    pub failed: usize,
    /// Bookings skipped because no recipient could be resolved.
    pub skipped: usize,
}

/// Subject and body of a reminder email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage {
    pub subject: String,
    pub body: String,
}

/// Latest start time that is due at `now`: `now + lead`, truncated to the minute.
pub fn reminder_cutoff(now: DateTime<Utc>, lead: TimeDelta) -> DateTime<Utc> {
    let cutoff = now + lead;
    cutoff
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or(cutoff)
}

pub fn compose_reminder(booking: &Booking, venue: &VenueTime) -> ReminderMessage {
    ReminderMessage {
        subject: REMINDER_SUBJECT.to_string(),
        body: format!(
            "Dear player,\n\nThis is a reminder for your upcoming booking:\n\n\
             Court Number: {}\nDate: {}\nTime: {} - {}\n\nThank you for using Courtopia!",
            booking.court_number,
            booking.booking_date.format(DATE_FORMAT),
            venue.format_time(booking.window.start),
            venue.format_time(booking.window.end),
        ),
    }
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    mail_sender: &'a dyn MailSender,
    venue: VenueTime,
    lead: TimeDelta,
}

impl<'a> NotificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        mail_sender: &'a dyn MailSender,
        venue: VenueTime,
        lead: TimeDelta,
    ) -> Self {
        Self {
            db,
            mail_sender,
            venue,
            lead,
        }
    }

    /// Sends reminders for every due booking.
    ///
    /// # Arguments
    /// - `now` - Current instant, used for the cutoff and the updated timestamp
    ///
    /// # Returns
    /// - `Ok(SweepReport)` - Per-outcome counts
    /// - `Err(AppError::DbErr)` - The due query itself failed
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweepReport, AppError> {
        let cutoff = reminder_cutoff(now, self.lead);
        let repo = BookingRepository::new(self.db);

        let due = repo.find_due_for_notification(cutoff).await?;
        let mut report = SweepReport {
            due: due.len(),
            ..Default::default()
        };

        for entity in due {
            let booking = match Booking::from_entity(entity) {
                Ok(booking) => booking,
                Err(e) => {
                    tracing::error!("Skipping unreadable booking during reminder sweep: {}", e);
                    report.skipped += 1;
                    continue;
                }
            };

            let Some(recipient) = self.resolve_recipient(&booking).await else {
                report.skipped += 1;
                continue;
            };

            let message = compose_reminder(&booking, &self.venue);
            if let Err(e) = self
                .mail_sender
                .send(&recipient, &message.subject, &message.body)
                .await
            {
                tracing::warn!(
                    "Failed to send reminder for booking {} to {}: {}",
                    booking.id,
                    recipient,
                    e
                );
                report.failed += 1;
                continue;
            }

            report.sent += 1;

            match repo.mark_notified(booking.id, now).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!("Booking {} was already marked notified", booking.id)
                }
                Err(e) => tracing::error!(
                    "Reminder sent for booking {} but marking it notified failed: {}",
                    booking.id,
                    e
                ),
            }
        }

        if report.due > 0 {
            tracing::info!(
                "Reminder sweep: {} due, {} sent, {} failed, {} skipped",
                report.due,
                report.sent,
                report.failed,
                report.skipped
            );
        }

        Ok(report)
    }

    /// Resolves the reminder recipient for a booking's owner.
    ///
    /// Prefers the owner's current directory email, falling back to the address stored
    /// on the booking. A directory lookup error skips the booking for this run.
    async fn resolve_recipient(&self, booking: &Booking) -> Option<String> {
        let user = match UserRepository::new(self.db)
            .find_by_student_id(&booking.student_id)
            .await
        {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(
                    "Failed to look up owner {} of booking {}: {}",
                    booking.student_id,
                    booking.id,
                    e
                );
                return None;
            }
        };

        let recipient = user
            .and_then(|u| u.email)
            .or_else(|| booking.user_email.clone())
            .filter(|email| !email.is_empty());

        if recipient.is_none() {
            tracing::warn!(
                "No email address for owner {} of booking {}",
                booking.student_id,
                booking.id
            );
        }

        recipient
    }
}
