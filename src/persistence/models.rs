//! Stored document models.
//!
//! The API schemas in [`crate::domain`] carry `chrono` timestamps that
//! serialize as RFC 3339 text. Stored documents keep event dates as native
//! BSON datetimes instead, so the collection layout stays queryable by date
//! and compatible with documents written by other clients.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Event, Venue};
use crate::error::GatewayError;

fn default_currency() -> String {
    "USD".to_string()
}

fn default_available() -> bool {
    true
}

/// An event document as held in the `event` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent {
    /// Event title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Event date. Written as a BSON datetime; RFC 3339 strings are
    /// accepted on read.
    #[serde(deserialize_with = "deserialize_stored_date")]
    pub date: bson::DateTime,
    /// Duration in minutes.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    /// Base ticket price.
    pub price: f64,
    /// Currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Embedded venue.
    pub venue: Venue,
    /// Hero image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Searchable tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether tickets are on sale.
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Reads a date stored either as a BSON datetime or as RFC 3339 text.
fn deserialize_stored_date<'de, D>(deserializer: D) -> Result<bson::DateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Bson::deserialize(deserializer)? {
        Bson::DateTime(date) => Ok(date),
        Bson::String(text) => DateTime::parse_from_rfc3339(&text)
            .map(|date| bson::DateTime::from_millis(date.timestamp_millis()))
            .map_err(|e| D::Error::custom(format!("invalid event date {text:?}: {e}"))),
        other => Err(D::Error::custom(format!(
            "expected a datetime or RFC 3339 string, found {:?}",
            other.element_type()
        ))),
    }
}

impl From<&Event> for StoredEvent {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            category: event.category.clone(),
            description: event.description.clone(),
            date: bson::DateTime::from_millis(event.date.timestamp_millis()),
            duration_minutes: event.duration_minutes,
            price: event.price,
            currency: event.currency.clone(),
            venue: event.venue.clone(),
            image_url: event.image_url.clone(),
            tags: event.tags.clone(),
            available: event.available,
        }
    }
}

impl TryFrom<StoredEvent> for Event {
    type Error = GatewayError;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let millis = stored.date.timestamp_millis();
        let date = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            GatewayError::Internal(format!("stored event date {millis}ms is out of range"))
        })?;
        Ok(Self {
            title: stored.title,
            category: stored.category,
            description: stored.description,
            date,
            duration_minutes: stored.duration_minutes,
            price: stored.price,
            currency: stored.currency,
            venue: stored.venue,
            image_url: stored.image_url,
            tags: stored.tags,
            available: stored.available,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::demo_events;
    use chrono::SubsecRound;
    use mongodb::bson::doc;

    fn sample_event() -> Event {
        let Some(event) = demo_events(Utc::now().trunc_subsecs(3)).into_iter().next() else {
            panic!("demo catalogue is empty");
        };
        event
    }

    #[test]
    fn date_is_written_as_native_datetime() {
        let Ok(document) = bson::to_document(&StoredEvent::from(&sample_event())) else {
            panic!("stored event should encode");
        };
        assert!(document.get_datetime("date").is_ok());
    }

    #[test]
    fn millisecond_dates_survive_the_round_trip() {
        let event = sample_event();
        let Ok(document) = bson::to_document(&StoredEvent::from(&event)) else {
            panic!("stored event should encode");
        };
        let Ok(stored) = bson::from_document::<StoredEvent>(document) else {
            panic!("stored event should decode");
        };
        assert!(Event::try_from(stored).is_ok_and(|back| back == event));
    }

    #[test]
    fn text_dates_are_accepted() {
        let Ok(mut document) = bson::to_document(&StoredEvent::from(&sample_event())) else {
            panic!("stored event should encode");
        };
        document.insert("date", "2026-07-01T19:30:00Z");
        let Ok(stored) = bson::from_document::<StoredEvent>(document) else {
            panic!("text date should decode");
        };
        let Ok(event) = Event::try_from(stored) else {
            panic!("text date should convert");
        };
        assert_eq!(event.date.to_rfc3339(), "2026-07-01T19:30:00+00:00");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        let document = doc! {
            "title": "Broken",
            "category": "concert",
            "date": "next tuesday",
            "price": 10.0,
            "venue": { "name": "Hall", "address": "1 Main St", "city": "Austin" },
        };
        assert!(bson::from_document::<StoredEvent>(document.clone()).is_err());

        let mut numeric = document;
        numeric.insert("date", 42_i32);
        assert!(bson::from_document::<StoredEvent>(numeric).is_err());
    }
}
