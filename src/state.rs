//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ContactService, LocatorService};
use crate::application::views::MapSettings;
use crate::domain::catalog::Catalog;
use crate::domain::delivery::MessageDelivery;
use crate::domain::entities::Borough;

/// Read-only services shared across requests.
///
/// Per-user selections never live here; they arrive with each request.
#[derive(Clone)]
pub struct AppState {
    pub locator: Arc<LocatorService>,
    pub contact: Arc<ContactService>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        delivery: Arc<dyn MessageDelivery>,
        map_settings: MapSettings,
        default_borough: Borough,
        delivery_timeout: Duration,
    ) -> Self {
        Self {
            locator: Arc::new(LocatorService::new(
                catalog.clone(),
                map_settings,
                default_borough,
            )),
            contact: Arc::new(ContactService::new(catalog, delivery, delivery_timeout)),
        }
    }
}
