#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use harvest_hub::api;
use harvest_hub::api::handlers::health_handler;
use harvest_hub::application::views::MapSettings;
use harvest_hub::domain::catalog::Catalog;
use harvest_hub::domain::delivery::{DeliveryError, MessageDelivery};
use harvest_hub::domain::entities::{
    Availability, Borough, ContactMessage, InstitutionDirectory, InstitutionRecord, PantryRecord,
    Weekday,
};
use harvest_hub::state::AppState;
use harvest_hub::web;

/// Delivery double that records every message and can be told to fail.
#[derive(Default)]
pub struct RecordingDelivery {
    sent: Mutex<Vec<ContactMessage>>,
    failure: Option<DeliveryError>,
    healthy: bool,
}

impl RecordingDelivery {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            ..Default::default()
        }
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self {
            failure: Some(error),
            healthy: false,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageDelivery for RecordingDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "recording".to_string()
    }

    fn sends_mail(&self) -> bool {
        true
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn pantry(
    name: &str,
    borough: Borough,
    days: &[Weekday],
    coordinates: Option<(f64, f64)>,
) -> PantryRecord {
    PantryRecord {
        program: name.to_string(),
        borough,
        availability: Availability::open_on(days),
        hours: "10am-2pm".to_string(),
        phone: "212-555-0100".to_string(),
        address: format!("{name} Street"),
        latitude: coordinates.map(|c| c.0),
        longitude: coordinates.map(|c| c.1),
    }
}

/// Three Manhattan pantries (one without coordinates), two in Brooklyn and
/// one in Queens.
pub fn test_catalog() -> Catalog {
    let pantries = vec![
        pantry("Harlem Pantry", Borough::Manhattan, &[Weekday::Mon, Weekday::Wed], Some((40.81, -73.95))),
        pantry("Chelsea Pantry", Borough::Manhattan, &[Weekday::Mon], Some((40.74, -74.00))),
        pantry("Midtown Pantry", Borough::Manhattan, &[Weekday::Sat], None),
        pantry("Bed-Stuy Pantry", Borough::Brooklyn, &[Weekday::Tue, Weekday::Thu], Some((40.68, -73.94))),
        pantry("Sunset Park Pantry", Borough::Brooklyn, &[Weekday::Sat, Weekday::Sun], Some((40.64, -74.01))),
        pantry("Astoria Pantry", Borough::Queens, &[Weekday::Wed], Some((40.76, -73.92))),
    ];

    let institutions = InstitutionDirectory::from_records(vec![
        InstitutionRecord::new("Example College", "pantry@example.edu"),
        InstitutionRecord::new("Other College", "help@other.edu"),
    ])
    .unwrap();

    Catalog::new(pantries, institutions)
}

pub fn create_test_state(delivery: Arc<dyn MessageDelivery>) -> AppState {
    create_test_state_with_default(delivery, Borough::Manhattan)
}

pub fn create_test_state_with_default(
    delivery: Arc<dyn MessageDelivery>,
    default_borough: Borough,
) -> AppState {
    AppState::new(
        Arc::new(test_catalog()),
        delivery,
        MapSettings::default(),
        default_borough,
        Duration::from_secs(2),
    )
}

/// Every route without rate limiting, which needs a peer address.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(
            "/api",
            api::routes::public_routes().merge(api::routes::contact_routes()),
        )
        .merge(web::routes::public_routes())
        .merge(web::routes::contact_routes())
        .with_state(state)
}
