//! Contact submission flow.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::catalog::Catalog;
use crate::domain::delivery::{DeliveryError, MessageDelivery};
use crate::domain::entities::{
    ContactMessage, ContactOutcome, ContactReceipt, ContactRequest, ContactStage,
};

/// Why a submission did not reach the institution.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Please provide both your email address and a message.")]
    Validation { fields: Vec<String> },

    #[error("Unknown institution '{institution}'")]
    Lookup { institution: String },

    #[error("Failed to send message. Error: {0}")]
    Delivery(#[source] DeliveryError),
}

/// Validates submissions, resolves the institution address and dispatches
/// the message.
///
/// Each call to [`ContactService::submit`] walks
/// `Idle -> Validating -> Resolving -> Dispatching -> Success | Failed` and
/// makes at most one delivery attempt. Nothing is queued or retried.
pub struct ContactService {
    catalog: Arc<Catalog>,
    delivery: Arc<dyn MessageDelivery>,
    timeout: Duration,
}

impl ContactService {
    pub fn new(catalog: Arc<Catalog>, delivery: Arc<dyn MessageDelivery>, timeout: Duration) -> Self {
        Self {
            catalog,
            delivery,
            timeout,
        }
    }

    /// Names offered in the institution selector, in dataset order.
    pub fn institution_names(&self) -> Vec<String> {
        self.catalog
            .institutions()
            .names()
            .map(str::to_string)
            .collect()
    }

    pub fn delivery(&self) -> &Arc<dyn MessageDelivery> {
        &self.delivery
    }

    /// Runs one submission to completion.
    ///
    /// # Errors
    ///
    /// - [`ContactError::Validation`] if the sender email or body is blank;
    ///   no delivery is attempted
    /// - [`ContactError::Lookup`] if the institution is not in the dataset
    /// - [`ContactError::Delivery`] if the transport fails or exceeds the timeout
    pub async fn submit(&self, request: ContactRequest) -> Result<ContactReceipt, ContactError> {
        trace_stage(ContactStage::Idle);

        trace_stage(ContactStage::Validating);
        if let Err(errors) = request.validate() {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|k| k.to_string())
                .collect();
            fields.sort();
            return Err(fail(ContactError::Validation { fields }));
        }

        trace_stage(ContactStage::Resolving);
        let recipient = self
            .catalog
            .institutions()
            .find(&request.institution)
            .cloned()
            .ok_or_else(|| {
                fail(ContactError::Lookup {
                    institution: request.institution.clone(),
                })
            })?;

        trace_stage(ContactStage::Dispatching);
        let message = ContactMessage::new(&request.sender_email, recipient, &request.body);

        match tokio::time::timeout(self.timeout, self.delivery.deliver(&message)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(fail(ContactError::Delivery(e))),
            Err(_) => return Err(fail(ContactError::Delivery(DeliveryError::Timeout(self.timeout)))),
        }

        trace_stage(ContactStage::Success);
        info!(
            institution = %message.recipient.name,
            backend = %self.delivery.describe(),
            "Contact message delivered"
        );

        Ok(ContactReceipt {
            institution: message.recipient.name,
            recipient_email: message.recipient.email,
            emailed: self.delivery.sends_mail(),
        })
    }

    /// Like [`ContactService::submit`], reduced to the user-visible outcome.
    pub async fn submit_for_outcome(&self, request: ContactRequest) -> ContactOutcome {
        ContactOutcome::from(self.submit(request).await)
    }
}

fn trace_stage(stage: ContactStage) {
    debug!(%stage, "Contact submission");
}

fn fail(error: ContactError) -> ContactError {
    trace_stage(ContactStage::Failed);
    warn!("Contact submission failed: {}", error);
    error
}

impl From<Result<ContactReceipt, ContactError>> for ContactOutcome {
    fn from(result: Result<ContactReceipt, ContactError>) -> Self {
        match result {
            Ok(receipt) if receipt.emailed => ContactOutcome::Success {
                institution: receipt.institution,
            },
            Ok(receipt) => ContactOutcome::Logged {
                institution: receipt.institution,
            },
            Err(e) => ContactOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::MockMessageDelivery;
    use crate::domain::entities::{InstitutionDirectory, InstitutionRecord};
    use async_trait::async_trait;

    fn catalog() -> Arc<Catalog> {
        let institutions = InstitutionDirectory::from_records(vec![
            InstitutionRecord::new("Example College", "admissions@example.edu"),
            InstitutionRecord::new("Other College", "info@other.edu"),
        ])
        .unwrap();
        Arc::new(Catalog::new(Vec::new(), institutions))
    }

    fn service(delivery: MockMessageDelivery) -> ContactService {
        ContactService::new(catalog(), Arc::new(delivery), Duration::from_secs(5))
    }

    fn mock_with_describe() -> MockMessageDelivery {
        let mut mock = MockMessageDelivery::new();
        mock.expect_describe().returning(|| "mock".to_string());
        mock.expect_sends_mail().returning(|| true);
        mock
    }

    #[tokio::test]
    async fn test_empty_email_is_rejected_without_delivery() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_deliver().times(0);

        let result = service(mock)
            .submit(ContactRequest::new("Example College", "", "Hello"))
            .await;

        match result {
            Err(ContactError::Validation { fields }) => assert_eq!(fields, vec!["sender_email"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected_without_delivery() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_deliver().times(0);

        let result = service(mock)
            .submit(ContactRequest::new("Example College", "me@example.com", "  "))
            .await;

        assert!(matches!(result, Err(ContactError::Validation { ref fields }) if fields == &vec!["body".to_string()]));
    }

    #[tokio::test]
    async fn test_successful_delivery_targets_institution_email() {
        let mut mock = mock_with_describe();
        mock.expect_deliver()
            .withf(|message| {
                message.recipient.email == "admissions@example.edu"
                    && message.sender_email == "me@example.com"
                    && message.subject == "Message from me@example.com"
                    && message.body == "Is the pantry open on Fridays?"
            })
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(mock)
            .submit_for_outcome(ContactRequest::new(
                "Example College",
                "me@example.com",
                "Is the pantry open on Fridays?",
            ))
            .await;

        assert_eq!(
            outcome,
            ContactOutcome::Success {
                institution: "Example College".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Transport("535 authentication failed".to_string())));

        let outcome = service(mock)
            .submit_for_outcome(ContactRequest::new("Example College", "me@example.com", "Hi"))
            .await;

        match outcome {
            ContactOutcome::Failed { reason } => {
                assert!(reason.starts_with("Failed to send message."));
                assert!(reason.contains("535 authentication failed"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_institution_is_lookup_error() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_deliver().times(0);

        let result = service(mock)
            .submit(ContactRequest::new("Missing College", "me@example.com", "Hi"))
            .await;

        assert!(matches!(result, Err(ContactError::Lookup { ref institution }) if institution == "Missing College"));
    }

    #[tokio::test]
    async fn test_resubmission_is_a_new_attempt() {
        let mut mock = mock_with_describe();
        let mut seq = mockall::Sequence::new();
        mock.expect_deliver()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(DeliveryError::Transport("connection reset".to_string())));
        mock.expect_deliver()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = service(mock);
        let request = ContactRequest::new("Other College", "me@example.com", "Hi");

        assert!(service.submit(request.clone()).await.is_err());
        assert!(service.submit(request).await.is_ok());
    }

    struct StalledDelivery;

    #[async_trait]
    impl MessageDelivery for StalledDelivery {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), DeliveryError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }

        fn describe(&self) -> String {
            "stalled".to_string()
        }

        fn sends_mail(&self) -> bool {
            true
        }

        async fn health_check(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_timeout_counts_as_delivery_failure() {
        let service = ContactService::new(
            catalog(),
            Arc::new(StalledDelivery),
            Duration::from_millis(20),
        );

        let result = service
            .submit(ContactRequest::new("Example College", "me@example.com", "Hi"))
            .await;

        assert!(matches!(
            result,
            Err(ContactError::Delivery(DeliveryError::Timeout(_)))
        ));
    }

    #[tokio::test]
    async fn test_log_only_backend_reports_logged_outcome() {
        let mut mock = MockMessageDelivery::new();
        mock.expect_describe().returning(|| "log".to_string());
        mock.expect_sends_mail().returning(|| false);
        mock.expect_deliver().times(1).returning(|_| Ok(()));

        let outcome = service(mock)
            .submit_for_outcome(ContactRequest::new("Example College", "me@example.com", "Hi"))
            .await;

        assert_eq!(
            outcome,
            ContactOutcome::Logged {
                institution: "Example College".to_string()
            }
        );
    }

    #[test]
    fn test_institution_names() {
        let service = service(MockMessageDelivery::new());

        assert_eq!(
            service.institution_names(),
            vec!["Example College", "Other College"]
        );
    }
}
