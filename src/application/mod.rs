//! Application layer orchestrating the domain for the HTTP and CLI front ends.
//!
//! - [`services::LocatorService`] - Filters the catalog and builds map/table views
//! - [`services::ContactService`] - Runs the contact submission flow
//! - [`views`] - Map and table view-models
//!
//! Every call takes its inputs explicitly; nothing here holds per-user state.

pub mod services;
pub mod views;
