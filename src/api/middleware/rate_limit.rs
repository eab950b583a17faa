//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for read-only pages and endpoints.
///
/// # Limits
///
/// - **Rate**: 1 token every 50ms (20 per second)
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> RateLimitLayer {
    build(50, 100)
}

/// Creates a stricter rate limiter for contact submissions.
///
/// # Limits
///
/// - **Rate**: 1 token every 6 seconds
/// - **Burst**: 5 messages
///
/// Every accepted submission turns into one outbound email, so this bounds
/// how much mail a single client can push through the relay.
///
/// # Example
///
/// ```rust,ignore
/// let contact = Router::new()
///     .route("/contact", post(contact_handler))
///     .layer(rate_limit::contact_layer());
/// ```
pub fn contact_layer() -> RateLimitLayer {
    build(6_000, 5)
}

fn build(replenish_ms: u64, burst: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
