//! Services driving the two user-facing flows.

pub mod contact_service;
pub mod locator_service;

pub use contact_service::{ContactError, ContactService};
pub use locator_service::{LocatorService, LocatorViews};
