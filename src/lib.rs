//! # event-booking-gateway
//!
//! REST API for listing events, seeding a demo catalogue, and booking
//! tickets against a MongoDB document store.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookingService (service/)
//!     │
//!     ├── Schemas: Event, Venue, Booking (domain/)
//!     │
//!     └── Storage ── MongoStore | MemoryStore (persistence/)
//! ```
//!
//! Storage is optional at runtime: without `DATABASE_URL` the server still
//! starts, and every data endpoint answers `500 database not configured`.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
