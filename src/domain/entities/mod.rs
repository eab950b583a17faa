//! Core domain entities.
//!
//! - [`PantryRecord`] - A food pantry with borough, opening days and coordinates
//! - [`InstitutionRecord`] - A contactable institution and its email address
//! - [`ContactRequest`] / [`ContactMessage`] - A contact form submission and the
//!   message built from it
//!
//! Entities are plain read-only data; filtering and rendering live in
//! [`crate::domain::filter`] and [`crate::application::views`].

pub mod contact;
pub mod institution;
pub mod pantry;

pub use contact::{ContactMessage, ContactOutcome, ContactReceipt, ContactRequest, ContactStage};
pub use institution::{InstitutionDirectory, InstitutionRecord};
pub use pantry::{Availability, Borough, PantryRecord, UnknownBorough, UnknownWeekday, Weekday};
