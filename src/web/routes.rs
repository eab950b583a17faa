//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    contact_page_handler, contact_submit_handler, map_page_handler, table_page_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /`        - Map view with filter sidebar
/// - `GET /table`   - Table view with the same filters
/// - `GET /contact` - Contact form
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(map_page_handler))
        .route("/table", get(table_page_handler))
        .route("/contact", get(contact_page_handler))
}

/// Contact form submission.
///
/// # Endpoints
///
/// - `POST /contact` - Send the form and re-render with the outcome
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_submit_handler))
}
