//! Contact form page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::IntoResponse,
};

use crate::api::dto::contact::ContactForm;
use crate::domain::entities::ContactOutcome;
use crate::state::AppState;

/// Template for the contact page.
///
/// Renders `templates/contact.html` with:
/// - Institution selector
/// - Sender email and message fields
/// - Success or failure banner after a submission
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub institutions: Vec<String>,
    pub selected: String,
    pub email: String,
    pub message: String,
    pub outcome: Option<ContactOutcome>,
}

/// Renders the empty contact form.
///
/// # Endpoint
///
/// `GET /contact`
pub async fn contact_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    let institutions = state.contact.institution_names();

    ContactTemplate {
        selected: institutions.first().cloned().unwrap_or_default(),
        institutions,
        email: String::new(),
        message: String::new(),
        outcome: None,
    }
}

/// Handles a contact form submission.
///
/// # Endpoint
///
/// `POST /contact` (`application/x-www-form-urlencoded`)
///
/// The page is always re-rendered with a banner describing the outcome.
/// On failure the entered values are kept so the user can resubmit; on
/// success the message field is cleared.
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let selected = form.institution.clone();
    let email = form.email.clone();
    let message = form.message.clone();

    let outcome = state.contact.submit_for_outcome(form.into()).await;

    ContactTemplate {
        institutions: state.contact.institution_names(),
        selected,
        email,
        message: if outcome.is_success() {
            String::new()
        } else {
            message
        },
        outcome: Some(outcome),
    }
}
