//! Domain layer: pantry and institution entities, the filter engine and the
//! delivery capability contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures loaded from the datasets
//! - [`catalog`] - The loaded datasets shared across requests
//! - [`filter`] - Pure borough/day filtering of pantry records
//! - [`delivery`] - Trait for the external message transport
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Implementations of [`delivery::MessageDelivery`] live in
//! [`crate::infrastructure::delivery`].

pub mod catalog;
pub mod delivery;
pub mod entities;
pub mod filter;
