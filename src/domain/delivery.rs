//! Message delivery capability used by the contact flow.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::entities::ContactMessage;

/// Failure reported by a delivery backend.
///
/// The reason string is shown to the user as-is, so implementations should
/// keep it free of credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("message could not be built: {0}")]
    Message(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),
}

/// Outbound transport for contact messages.
///
/// Exactly one call to [`MessageDelivery::deliver`] is made per submission;
/// implementations must not retry on their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::delivery::SmtpDelivery`] - SMTP relay via lettre
/// - [`crate::infrastructure::delivery::LogDelivery`] - Logs messages, used when SMTP is not configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Sends `message` from the sender to the recipient institution.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;

    /// Short description of the backend for health reporting.
    fn describe(&self) -> String;

    /// Whether a successful [`MessageDelivery::deliver`] puts the message in
    /// the recipient's mailbox. `false` for backends that only record it.
    fn sends_mail(&self) -> bool;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
