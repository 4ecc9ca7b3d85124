//! Domain layer: schemas, identifiers and the demo catalogue.
//!
//! This module contains the validated shapes of events, venues and
//! bookings, the document identifier newtype, and the search criteria
//! used when listing events.

pub mod booking;
pub mod demo;
pub mod document_id;
pub mod event;

pub use booking::Booking;
pub use demo::demo_events;
pub use document_id::DocumentId;
pub use event::{Event, EventQuery, Venue};
