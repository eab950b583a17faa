//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Map page (filters in the query string)
//! - `GET  /table`         - Table page
//! - `GET  /contact`       - Contact form
//! - `POST /contact`       - Contact form submission
//! - `GET  /health`        - Health check: catalog, mail backend
//! - `/api/*`              - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter and shared across both contact submission routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the returned service must be
/// served with connect info (see [`crate::server::run`]). Each limiter is
/// built once and cloned onto its routes; clones share one set of per-IP
/// buckets, so `/contact` and `/api/contact` draw from the same budget.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let read_limit = rate_limit::layer();
    let contact_limit = rate_limit::contact_layer();

    let api_router = Router::new()
        .merge(api::routes::public_routes().layer(read_limit.clone()))
        .merge(api::routes::contact_routes().layer(contact_limit.clone()));

    let web_router = Router::new()
        .merge(web::routes::public_routes().layer(read_limit.clone()))
        .merge(web::routes::contact_routes().layer(contact_limit));

    let health_router = Router::new()
        .route("/health", get(health_handler))
        .layer(read_limit);

    let router = Router::new()
        .merge(health_router)
        .nest("/api", api_router)
        .merge(web_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
