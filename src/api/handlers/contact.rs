//! Handler for the contact API endpoint.

use axum::{Json, extract::State};

use crate::api::dto::contact::{ContactForm, ContactResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Sends a message to the selected institution.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "institution": "Example College",
///   "email": "student@example.com",
///   "message": "Is the campus pantry open on Fridays?"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "sent",
///   "institution": "Example College",
///   "message": "Message sent successfully to Example College!"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the email or message is blank
/// - 404 Not Found if the institution is unknown
/// - 502 Bad Gateway if the mail transport fails or times out
///
/// Each request is exactly one delivery attempt; failed messages are not retried.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let receipt = state.contact.submit(form.into()).await?;

    Ok(Json(ContactResponse::from(receipt)))
}
