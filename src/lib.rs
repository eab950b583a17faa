//! # Harvest Hub
//!
//! A food pantry locator for New York City built with Axum: a filterable
//! map of pantries, a table of the same results, and a contact form that
//! emails campus food programs.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Pantry and institution records, filtering, delivery trait
//! - **Application Layer** ([`application`]) - Locator and contact services, map and table views
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV loading and mail delivery
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages for the map, table and contact form
//!
//! ## Features
//!
//! - Borough and weekday filters shared by the map and table
//! - Marker popups with hours, phone and address
//! - One-shot contact delivery over SMTP with a timeout
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Datasets default to data/food_rows.csv and data/cuny_food_rows.csv
//! export SMTP_HOST="smtp.example.com"   # Optional, messages are logged otherwise
//! export SMTP_USERNAME="pantry-bot@example.com"
//! export SMTP_PASSWORD="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, LocatorService};
    pub use crate::domain::catalog::Catalog;
    pub use crate::domain::entities::{Borough, InstitutionRecord, PantryRecord, Weekday};
    pub use crate::domain::filter::FilterCriteria;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
