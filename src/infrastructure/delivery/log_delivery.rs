//! Delivery backend that only logs messages.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::delivery::{DeliveryError, MessageDelivery};
use crate::domain::entities::ContactMessage;

/// A delivery backend that records messages in the log and reports success.
///
/// Used when no SMTP relay is configured, e.g. in local development.
pub struct LogDelivery;

impl LogDelivery {
    pub fn new() -> Self {
        debug!("Using LogDelivery (SMTP disabled)");
        Self
    }
}

impl Default for LogDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageDelivery for LogDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        info!(
            from = %message.sender_email,
            to = %message.recipient.email,
            subject = %message.subject,
            body = %message.body,
            "Contact message logged (SMTP disabled)"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "log".to_string()
    }

    fn sends_mail(&self) -> bool {
        false
    }

    async fn health_check(&self) -> bool {
        true
    }
}
