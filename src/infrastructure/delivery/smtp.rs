//! SMTP delivery backed by lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SmtpSettings;
use crate::domain::delivery::{DeliveryError, MessageDelivery};
use crate::domain::entities::ContactMessage;

/// Sends contact messages through an SMTP relay using STARTTLS.
pub struct SmtpDelivery {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpDelivery {
    /// Builds the transport. No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] if the relay host is invalid.
    pub fn new(settings: &SmtpSettings) -> Result<Self, DeliveryError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(settings.port)
            .timeout(Some(Duration::from_secs(settings.timeout_seconds)));

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            host: settings.host.clone(),
            port: settings.port,
        })
    }
}

#[async_trait]
impl MessageDelivery for SmtpDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let email = build_email(message)?;

        let response = self.transport.send(email).await.map_err(|e| {
            warn!(host = %self.host, "SMTP send failed: {}", e);
            DeliveryError::Transport(e.to_string())
        })?;

        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("smtp://{}:{}", self.host, self.port)
    }

    fn sends_mail(&self) -> bool {
        true
    }

    async fn health_check(&self) -> bool {
        match self.transport.test_connection().await {
            Ok(connected) => connected,
            Err(e) => {
                warn!(host = %self.host, "SMTP health check failed: {}", e);
                false
            }
        }
    }
}

/// Builds the plain-text email for a contact message.
///
/// The sender is used both as `From` and `Reply-To` so the institution can
/// answer directly.
pub(crate) fn build_email(message: &ContactMessage) -> Result<Message, DeliveryError> {
    let from = parse_mailbox(&message.sender_email)?;
    let to = parse_mailbox(&message.recipient.email)?;

    Message::builder()
        .from(from.clone())
        .reply_to(from)
        .to(to)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| DeliveryError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
