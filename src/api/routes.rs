//! API route configuration.
//!
//! The API is public and read-only apart from contact submissions, which are
//! split out so they can carry a stricter rate limit.

use crate::api::handlers::{
    contact_handler, institutions_handler, map_handler, pantries_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET /map`           - Map model (center, zoom, markers, legend) for the filters
/// - `GET /pantries`      - Table rows for the filters
/// - `GET /institutions`  - Institutions available in the contact form
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/map", get(map_handler))
        .route("/pantries", get(pantries_handler))
        .route("/institutions", get(institutions_handler))
}

/// Contact submission routes.
///
/// # Endpoints
///
/// - `POST /contact` - Send a message to an institution
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
