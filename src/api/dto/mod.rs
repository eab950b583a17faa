//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs deserialize with Serde; validation of contact submissions
//! happens in [`crate::application::services::ContactService`].

pub mod contact;
pub mod filter;
pub mod health;
pub mod locator;
