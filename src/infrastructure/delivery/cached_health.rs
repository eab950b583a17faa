//! Health check caching for delivery backends.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::delivery::{DeliveryError, MessageDelivery};
use crate::domain::entities::ContactMessage;

/// How long a health check result is reused.
pub const DEFAULT_HEALTH_TTL: Duration = Duration::from_secs(60);

/// Wraps a backend so that `/health` cannot open a relay connection on
/// every request.
///
/// Delivery and description pass straight through. Health results are
/// reused until `ttl` has elapsed; concurrent callers wait for a single
/// in-flight check instead of starting their own.
pub struct CachedHealth {
    inner: Arc<dyn MessageDelivery>,
    ttl: Duration,
    last: Mutex<Option<(Instant, bool)>>,
}

impl CachedHealth {
    pub fn new(inner: Arc<dyn MessageDelivery>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            last: Mutex::new(None),
        }
    }
}

#[async_trait]
impl MessageDelivery for CachedHealth {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        self.inner.deliver(message).await
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn sends_mail(&self) -> bool {
        self.inner.sends_mail()
    }

    async fn health_check(&self) -> bool {
        let mut last = self.last.lock().await;

        if let Some((checked_at, healthy)) = *last
            && checked_at.elapsed() < self.ttl
        {
            debug!(healthy, "Using cached delivery health");
            return healthy;
        }

        let healthy = self.inner.health_check().await;
        *last = Some((Instant::now(), healthy));
        healthy
    }
}
