//! Booking service: event listing, demo seeding and booking creation.

use chrono::Utc;

use crate::domain::{Booking, DocumentId, Event, EventQuery, demo_events};
use crate::error::GatewayError;
use crate::persistence::{BOOKING_COLLECTION, EVENT_COLLECTION, Filter, Storage, StoredEvent};

/// Result of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Events were already present; nothing was written.
    AlreadySeeded,
    /// The demo catalogue was written; holds the number of events inserted.
    Inserted(usize),
}

/// Orchestration layer for all event and booking operations.
///
/// Stateless coordinator over a [`Storage`] handle. Each operation is an
/// independent request/response; there is no locking and no cross-call
/// transaction.
#[derive(Debug, Clone)]
pub struct BookingService {
    storage: Storage,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Returns a reference to the inner [`Storage`].
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Lists every event matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] if storage is unavailable, or
    /// a persistence error on read failure.
    pub async fn list_events(&self, query: &EventQuery) -> Result<Vec<Event>, GatewayError> {
        let stored: Vec<StoredEvent> = self
            .storage
            .query(EVENT_COLLECTION, &query.to_filter())
            .await?;
        let events = stored
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            category = query.category(),
            text = query.text(),
            count = events.len(),
            "listed events"
        );
        Ok(events)
    }

    /// Inserts the demo catalogue unless any event already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] if storage is unavailable, or
    /// a persistence error on read or write failure.
    pub async fn seed_demo_events(&self) -> Result<SeedOutcome, GatewayError> {
        let existing = self.storage.count(EVENT_COLLECTION, &Filter::All).await?;
        if existing > 0 {
            tracing::info!(existing, "seed skipped; events already exist");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let events = demo_events(Utc::now());
        for event in &events {
            self.storage
                .insert(EVENT_COLLECTION, &StoredEvent::from(event))
                .await?;
        }

        tracing::info!(inserted = events.len(), "demo events seeded");
        Ok(SeedOutcome::Inserted(events.len()))
    }

    /// Persists `booking` after checking that its event exists.
    ///
    /// The existence check and the insert are two separate storage calls;
    /// the event is not locked in between, and neither `available` nor any
    /// capacity is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] if storage is unavailable,
    /// [`GatewayError::InvalidEventId`] if `event_id` is malformed,
    /// [`GatewayError::EventNotFound`] if no such event exists, or a
    /// persistence error on read or write failure.
    pub async fn create_booking(&self, booking: &Booking) -> Result<DocumentId, GatewayError> {
        self.storage.backend()?;

        let event_id: DocumentId = booking
            .event_id
            .parse()
            .map_err(|_| GatewayError::InvalidEventId(booking.event_id.clone()))?;

        let found = self
            .storage
            .count(EVENT_COLLECTION, &Filter::Id(*event_id.as_object_id()))
            .await?;
        if found == 0 {
            return Err(GatewayError::EventNotFound(event_id));
        }

        let booking_id = self.storage.insert(BOOKING_COLLECTION, booking).await?;
        tracing::info!(
            %booking_id,
            %event_id,
            quantity = booking.quantity,
            "booking created"
        );
        Ok(booking_id)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::{DocumentStore, MemoryStore};
    use chrono::SubsecRound;
    use mongodb::bson;

    fn make_service() -> BookingService {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::default());
        BookingService::new(Storage::with_backend(store))
    }

    fn booking_for(event_id: &str, quantity: i64) -> Booking {
        Booking {
            event_id: event_id.to_string(),
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            quantity,
            notes: Some("aisle seat".to_string()),
        }
    }

    async fn seeded_event_id(service: &BookingService) -> DocumentId {
        let Some(event) = demo_events(Utc::now()).into_iter().next() else {
            panic!("demo catalogue is empty");
        };
        let Ok(id) = service
            .storage()
            .insert(EVENT_COLLECTION, &StoredEvent::from(&event))
            .await
        else {
            panic!("event insert failed");
        };
        id
    }

    #[tokio::test]
    async fn seeding_twice_inserts_once() {
        let service = make_service();

        let first = service.seed_demo_events().await;
        assert!(matches!(first, Ok(SeedOutcome::Inserted(3))));

        let second = service.seed_demo_events().await;
        assert!(matches!(second, Ok(SeedOutcome::AlreadySeeded)));

        let total = service.storage().count(EVENT_COLLECTION, &Filter::All).await;
        assert!(total.is_ok_and(|n| n == 3));
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let service = make_service();
        let _ = service.seed_demo_events().await;

        let query = EventQuery::new(Some("concert".to_string()), None);
        let Ok(events) = service.list_events(&query).await else {
            panic!("list failed");
        };
        assert_eq!(events.len(), 1);
        assert!(events.iter().all(|e| e.category == "concert"));

        let query = EventQuery::new(Some("Concert".to_string()), None);
        let events = service.list_events(&query).await;
        assert!(events.is_ok_and(|e| e.is_empty()));
    }

    #[tokio::test]
    async fn text_query_finds_neon_event() {
        let service = make_service();
        let _ = service.seed_demo_events().await;

        for needle in ["neon", "NEON", "Neon Nights"] {
            let query = EventQuery::new(None, Some(needle.to_string()));
            let Ok(events) = service.list_events(&query).await else {
                panic!("list failed");
            };
            assert_eq!(events.len(), 1, "needle {needle}");
            assert!(events.iter().any(|e| e.title == "Neon Nights Live DJ"));
        }
    }

    #[tokio::test]
    async fn text_query_matches_description_and_tags() {
        let service = make_service();
        let _ = service.seed_demo_events().await;

        let by_description = EventQuery::new(None, Some("synthwave".to_string()));
        let events = service.list_events(&by_description).await;
        assert!(events.is_ok_and(|e| e.len() == 1));

        let by_tag = EventQuery::new(None, Some("premiere".to_string()));
        let events = service.list_events(&by_tag).await;
        assert!(events.is_ok_and(|e| e.iter().all(|ev| ev.category == "cinema")));
    }

    #[tokio::test]
    async fn inserted_event_round_trips_unchanged() {
        let service = make_service();
        let Some(event) = demo_events(Utc::now().trunc_subsecs(3)).into_iter().nth(1) else {
            panic!("demo catalogue too short");
        };
        let _ = service
            .storage()
            .insert(EVENT_COLLECTION, &StoredEvent::from(&event))
            .await;

        let query = EventQuery::new(Some(event.category.clone()), None);
        let events = service.list_events(&query).await;
        assert!(events.is_ok_and(|e| e == vec![event]));
    }

    #[tokio::test]
    async fn events_with_native_or_text_dates_are_listed() {
        let service = make_service();
        let Some(event) = demo_events(Utc::now()).into_iter().next() else {
            panic!("demo catalogue is empty");
        };
        let Ok(mut native) = bson::to_document(&event) else {
            panic!("event should encode");
        };
        native.insert("date", bson::DateTime::now());
        let Ok(text) = bson::to_document(&event) else {
            panic!("event should encode");
        };
        assert!(text.get_str("date").is_ok());

        let Ok(backend) = service.storage().backend() else {
            panic!("storage is available");
        };
        let _ = backend.insert_document(EVENT_COLLECTION, native).await;
        let _ = backend.insert_document(EVENT_COLLECTION, text).await;

        let events = service.list_events(&EventQuery::default()).await;
        assert!(events.is_ok_and(|e| e.len() == 2 && e.iter().all(|ev| ev.title == event.title)));
    }

    #[tokio::test]
    async fn booking_existing_event_returns_fresh_id() {
        let service = make_service();
        let event_id = seeded_event_id(&service).await;

        let result = service
            .create_booking(&booking_for(&event_id.to_string(), 2))
            .await;
        let Ok(booking_id) = result else {
            panic!("booking failed");
        };
        assert_ne!(booking_id, event_id);

        let stored = service
            .storage()
            .query::<Booking>(BOOKING_COLLECTION, &Filter::Id(*booking_id.as_object_id()))
            .await;
        assert!(stored.is_ok_and(|b| b.len() == 1));
    }

    #[tokio::test]
    async fn malformed_event_id_is_rejected() {
        let service = make_service();
        let result = service.create_booking(&booking_for("not-an-id", 1)).await;
        assert!(matches!(result, Err(GatewayError::InvalidEventId(_))));
    }

    #[tokio::test]
    async fn padded_event_id_is_rejected() {
        let service = make_service();
        let event_id = seeded_event_id(&service).await;

        for padded in [format!("  {event_id}\n"), format!("{event_id} ")] {
            let result = service.create_booking(&booking_for(&padded, 1)).await;
            assert!(
                matches!(result, Err(GatewayError::InvalidEventId(ref raw)) if *raw == padded),
                "{padded:?}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_event_id_is_not_found() {
        let service = make_service();
        let _ = seeded_event_id(&service).await;

        let missing = DocumentId::new();
        let result = service
            .create_booking(&booking_for(&missing.to_string(), 1))
            .await;
        assert!(matches!(result, Err(GatewayError::EventNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn unavailable_storage_fails_every_operation() {
        let service = BookingService::new(Storage::unavailable());

        assert!(matches!(
            service.list_events(&EventQuery::default()).await,
            Err(GatewayError::NotConfigured)
        ));
        assert!(matches!(
            service.seed_demo_events().await,
            Err(GatewayError::NotConfigured)
        ));
        // availability is checked before the id is parsed
        assert!(matches!(
            service.create_booking(&booking_for("not-an-id", 1)).await,
            Err(GatewayError::NotConfigured)
        ));
    }
}
