//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{BookingResponse, SeedResponse};
use super::handlers::{bookings, events, system};
use crate::domain::{Booking, Event, Venue};
use crate::error::{ErrorBody, ErrorResponse};

/// OpenAPI documentation for the event booking API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Event Booking API",
        description = "List events, seed demo data and book tickets."
    ),
    paths(
        system::root_handler,
        system::health_handler,
        system::diagnostics_handler,
        events::list_events,
        events::seed_events,
        bookings::create_booking,
    ),
    components(schemas(
        Event,
        Venue,
        Booking,
        SeedResponse,
        BookingResponse,
        ErrorResponse,
        ErrorBody,
        system::RootResponse,
        system::HealthResponse,
        system::DiagnosticsResponse,
    )),
    tags(
        (name = "Events", description = "Event catalogue"),
        (name = "Bookings", description = "Ticket bookings"),
        (name = "System", description = "Liveness and diagnostics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/test", "/api/events", "/api/seed", "/api/book"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn booking_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.map(|c| c.schemas).unwrap_or_default();
        assert!(schemas.contains_key("Booking"));
        assert!(schemas.contains_key("Event"));
    }
}
