use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::server::{
    error::mail::MailError,
    model::{
        booking::CreateBookingParams,
        user::{Caller, Role},
    },
    service::mail::MailSender,
};

mod booking;

/// Instant in June 2025 at the given UTC day and wall clock time.
fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, hour, minute, 0)
        .single()
        .unwrap()
}

fn caller_for(user: &entity::user::Model) -> Caller {
    Caller {
        user_id: user.id,
        student_id: user.student_id.clone(),
        email: user.email.clone(),
        role: Role::parse(&user.role).unwrap(),
    }
}

fn booking_request(court_number: i32, date: &str, start: &str, end: &str) -> CreateBookingParams {
    CreateBookingParams {
        court_number,
        booking_date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

/// Mail sender that keeps every message it is asked to send.
#[derive(Default)]
struct RecordingMailSender {
    sent: Mutex<Vec<(String, String, String)>>,
}

impl RecordingMailSender {
    fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(to, _, _)| to.clone())
            .collect()
    }

    fn messages(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Mail sender whose relay always rejects.
struct FailingMailSender;

#[async_trait]
impl MailSender for FailingMailSender {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::Rejected {
            status: 503,
            body: "relay unavailable".to_string(),
        })
    }
}
