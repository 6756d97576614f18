//! Outbound mail transport used by the notification sweep.
//!
//! The sweep only sees the [`MailSender`] trait. Production wires either an HTTP mail
//! relay or, when no relay is configured, a sender that writes reminders to the log.

use async_trait::async_trait;
use url::Url;

use crate::server::error::mail::MailError;

/// Delivers a single plain text message.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Sends one message; no retry is attempted here.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `subject` - Subject line
    /// - `body` - Plain text body
    ///
    /// # Returns
    /// - `Ok(())` - The transport accepted the message
    /// - `Err(MailError)` - Transport failure or rejection
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Posts messages as JSON to an HTTP mail relay.
///
/// Request body: `{"from", "to", "subject", "text"}`, with an optional bearer token.
pub struct RelayMailSender {
    http_client: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
    from: String,
}

impl RelayMailSender {
    pub fn new(
        http_client: reqwest::Client,
        endpoint: Url,
        token: Option<String>,
        from: String,
    ) -> Self {
        Self {
            http_client,
            endpoint,
            token,
            from,
        }
    }
}

#[async_trait]
impl MailSender for RelayMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let mut request = self
            .http_client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({
                "from": self.from,
                "to": to,
                "subject": subject,
                "text": body,
            }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Mail relay accepted message to {}", to);

        Ok(())
    }
}

/// Writes messages to the log instead of sending them.
///
/// Used when `MAIL_RELAY_URL` is unset so development setups still exercise the sweep.
pub struct LogMailSender {
    from: String,
}

impl LogMailSender {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        tracing::info!(
            from = %self.from,
            to = %to,
            subject = %subject,
            "Mail relay not configured, logging message:\n{}",
            body
        );
        Ok(())
    }
}
