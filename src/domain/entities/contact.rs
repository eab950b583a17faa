//! Contact message entities used by the contact submission flow.

use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

use super::institution::InstitutionRecord;

/// A contact form submission, before validation.
#[derive(Debug, Clone, Default, Validate)]
pub struct ContactRequest {
    /// Exact institution name as listed in the institution dataset.
    pub institution: String,

    #[validate(custom(function = "not_blank"))]
    pub sender_email: String,

    #[validate(custom(function = "not_blank"))]
    pub body: String,
}

impl ContactRequest {
    pub fn new(
        institution: impl Into<String>,
        sender_email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            sender_email: sender_email.into(),
            body: body.into(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be empty".into());
        return Err(error);
    }
    Ok(())
}

/// The message handed to the delivery capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub sender_email: String,
    pub recipient: InstitutionRecord,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn new(sender_email: &str, recipient: InstitutionRecord, body: &str) -> Self {
        let sender_email = sender_email.trim().to_string();
        Self {
            subject: format!("Message from {sender_email}"),
            sender_email,
            recipient,
            body: body.to_string(),
        }
    }
}

/// Confirmation of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub institution: String,
    pub recipient_email: String,
    /// `false` when the backend only logged the message.
    pub emailed: bool,
}

/// Stages of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStage {
    Idle,
    Validating,
    Resolving,
    Dispatching,
    Success,
    Failed,
}

impl fmt::Display for ContactStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactStage::Idle => "idle",
            ContactStage::Validating => "validating",
            ContactStage::Resolving => "resolving",
            ContactStage::Dispatching => "dispatching",
            ContactStage::Success => "success",
            ContactStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// User-visible result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactOutcome {
    Success { institution: String },
    /// Accepted by a backend that does not send mail.
    Logged { institution: String },
    Failed { reason: String },
}

impl ContactOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ContactOutcome::Success { .. } | ContactOutcome::Logged { .. }
        )
    }

    /// Same value as the serialized `status` tag; used as the banner style.
    pub fn kind(&self) -> &'static str {
        match self {
            ContactOutcome::Success { .. } => "success",
            ContactOutcome::Logged { .. } => "logged",
            ContactOutcome::Failed { .. } => "failed",
        }
    }

    /// Banner text shown next to the contact form.
    pub fn message(&self) -> String {
        match self {
            ContactOutcome::Success { institution } => {
                format!("Message sent successfully to {institution}!")
            }
            ContactOutcome::Logged { institution } => {
                format!("Message to {institution} was logged but not emailed (SMTP disabled).")
            }
            ContactOutcome::Failed { reason } => reason.clone(),
        }
    }
}
