//! Service layer: business logic orchestration.
//!
//! [`BookingService`] coordinates between the HTTP handlers and the
//! [`crate::persistence::Storage`] handle.

pub mod booking_service;

pub use booking_service::{BookingService, SeedOutcome};
