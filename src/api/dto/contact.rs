//! DTOs for the contact endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ContactOutcome, ContactReceipt, ContactRequest};

/// Contact form fields, shared by the HTML form and the JSON API.
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation errors rather than rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub institution: String,
    pub email: String,
    pub message: String,
}

impl From<ContactForm> for ContactRequest {
    fn from(form: ContactForm) -> Self {
        ContactRequest::new(form.institution, form.email, form.message)
    }
}

/// Response for an accepted message.
///
/// `status` is `sent` when the message was emailed and `logged` when the
/// server runs without SMTP and only recorded it.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub institution: String,
    pub message: String,
}

impl From<ContactReceipt> for ContactResponse {
    fn from(receipt: ContactReceipt) -> Self {
        let (status, outcome) = if receipt.emailed {
            (
                "sent",
                ContactOutcome::Success {
                    institution: receipt.institution.clone(),
                },
            )
        } else {
            (
                "logged",
                ContactOutcome::Logged {
                    institution: receipt.institution.clone(),
                },
            )
        };

        Self {
            status,
            message: outcome.message(),
            institution: receipt.institution,
        }
    }
}
