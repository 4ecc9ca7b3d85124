//! Data Transfer Objects for REST request/response serialization.
//!
//! Event and booking bodies reuse the domain schemas directly; the types
//! here cover query strings and operation results.

pub mod booking_dto;
pub mod event_dto;

pub use booking_dto::*;
pub use event_dto::*;
