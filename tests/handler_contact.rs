mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use common::RecordingDelivery;
use harvest_hub::domain::delivery::DeliveryError;
use harvest_hub::infrastructure::delivery::LogDelivery;

#[tokio::test]
async fn test_contact_delivers_to_institution() {
    let delivery = Arc::new(RecordingDelivery::healthy());
    let state = common::create_test_state(delivery.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "institution": "Example College",
            "email": "student@example.com",
            "message": "Is the pantry open on Friday?"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "sent");
    assert_eq!(body["message"], "Message sent successfully to Example College!");

    let sent = delivery.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient.email, "pantry@example.edu");
    assert_eq!(sent[0].sender_email, "student@example.com");
    assert_eq!(sent[0].subject, "Message from student@example.com");
    assert_eq!(sent[0].body, "Is the pantry open on Friday?");
}

#[tokio::test]
async fn test_contact_missing_fields_is_validation_error() {
    let delivery = Arc::new(RecordingDelivery::healthy());
    let state = common::create_test_state(delivery.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({ "institution": "Example College", "email": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(
        body["error"]["message"],
        "Please provide both your email address and a message."
    );
    assert!(delivery.sent().is_empty());
}

#[tokio::test]
async fn test_contact_unknown_institution_is_not_found() {
    let delivery = Arc::new(RecordingDelivery::healthy());
    let state = common::create_test_state(delivery.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "institution": "Nowhere College",
            "email": "student@example.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["institution"], "Nowhere College");
    assert!(delivery.sent().is_empty());
}

#[tokio::test]
async fn test_contact_transport_failure_is_bad_gateway() {
    let delivery = Arc::new(RecordingDelivery::failing(DeliveryError::Transport(
        "connection refused".to_string(),
    )));
    let state = common::create_test_state(delivery);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "institution": "Other College",
            "email": "student@example.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "delivery_failed");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Failed to send message. Error:")
    );
    assert!(
        body["error"]["details"]["reason"]
            .as_str()
            .unwrap()
            .contains("connection refused")
    );
}

#[tokio::test]
async fn test_contact_without_smtp_reports_logged_status() {
    let state = common::create_test_state(Arc::new(LogDelivery::new()));
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "institution": "Example College",
            "email": "student@example.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "logged");
    assert_eq!(body["institution"], "Example College");
    assert_eq!(
        body["message"],
        "Message to Example College was logged but not emailed (SMTP disabled)."
    );
}
