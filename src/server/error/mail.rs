use thiserror::Error;

/// Failures while handing a reminder to the mail transport.
///
/// Mail errors never reach an HTTP response directly; the notification sweep logs
/// them and leaves the booking due so the next tick retries.
#[derive(Error, Debug)]
pub enum MailError {
    /// The relay could not be reached or the request could not be sent.
    #[error("Failed to reach mail relay: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("Mail relay rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the relay
        status: u16,
        /// Response body, kept for the log line
        body: String,
    },
}
