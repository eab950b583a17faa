//! Web layer for browser-based UI.
//!
//! Provides the map, table and contact pages. Uses Askama templates for
//! server-side rendering; the map itself is drawn client-side by Leaflet
//! from a JSON model embedded in the page.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
