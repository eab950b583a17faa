//! Infrastructure layer for external integrations.
//!
//! Implements the collaborators the core depends on but does not own.
//!
//! # Modules
//!
//! - [`dataset`] - CSV loading of the pantry and institution tables
//! - [`delivery`] - Outbound message transports (SMTP and log-only)

pub mod dataset;
pub mod delivery;
