//! Event and venue schemas.
//!
//! An [`Event`] is a bookable occurrence (concert, screening, dining
//! experience) with an embedded [`Venue`]. Events are read-only from the
//! API's point of view: they enter the store through seeding only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::persistence::Filter;

/// Fields searched by the free-text event query.
pub const SEARCHABLE_FIELDS: [&str; 3] = ["title", "description", "tags"];

fn default_country() -> String {
    "USA".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_available() -> bool {
    true
}

/// Physical location of an event. Embedded, has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Venue {
    /// Venue name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// State or region.
    #[serde(default)]
    pub state: Option<String>,
    /// Country. Defaults to `"USA"`.
    #[serde(default = "default_country")]
    pub country: String,
    /// Seating capacity, at least 1 when present.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub capacity: Option<i64>,
}

/// A bookable event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Event {
    /// Event title.
    pub title: String,
    /// Category, informally one of `concert`, `cinema`, `dine-in`, `live-show`.
    pub category: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Event date and time.
    pub date: DateTime<Utc>,
    /// Duration in minutes.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub duration_minutes: Option<i64>,
    /// Base ticket price.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Currency code. Defaults to `"USD"`.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Where the event takes place.
    #[validate(nested)]
    pub venue: Venue,
    /// Hero image for the event.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Searchable tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether tickets are currently on sale.
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Search criteria for listing events.
///
/// Blank strings are treated as absent so that `?category=&q=` behaves
/// like no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    category: Option<String>,
    text: Option<String>,
}

impl EventQuery {
    /// Builds a query from raw, possibly blank, parameters.
    #[must_use]
    pub fn new(category: Option<String>, text: Option<String>) -> Self {
        Self {
            category: non_blank(category),
            text: non_blank(text),
        }
    }

    /// Exact category to match, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Free-text needle, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Renders the criteria as a storage [`Filter`].
    #[must_use]
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::All;
        if let Some(category) = &self.category {
            filter = filter.and(Filter::Equals {
                field: "category".to_string(),
                value: category.clone(),
            });
        }
        if let Some(text) = &self.text {
            filter = filter.and(Filter::TextSearch {
                fields: SEARCHABLE_FIELDS.iter().map(|f| (*f).to_string()).collect(),
                needle: text.clone(),
            });
        }
        filter
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
