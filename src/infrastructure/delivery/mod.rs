//! Message delivery backends.
//!
//! Provides two [`crate::domain::delivery::MessageDelivery`] implementations:
//! - [`SmtpDelivery`] - SMTP relay with STARTTLS and optional credentials
//! - [`LogDelivery`] - Logs messages instead of sending them
//!
//! [`CachedHealth`] wraps either one to rate-limit its health checks.

mod cached_health;
mod log_delivery;
mod smtp;

pub use cached_health::{CachedHealth, DEFAULT_HEALTH_TTL};
pub use log_delivery::LogDelivery;
pub use smtp::SmtpDelivery;
