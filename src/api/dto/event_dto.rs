//! Event listing and seeding DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::EventQuery;
use crate::service::SeedOutcome;

/// Query parameters for `GET /api/events`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEventsParams {
    /// Exact category to match (e.g. `concert`).
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive text matched against title, description and tags.
    #[serde(default)]
    pub q: Option<String>,
}

impl From<ListEventsParams> for EventQuery {
    fn from(params: ListEventsParams) -> Self {
        Self::new(params.category, params.q)
    }
}

/// Response body for `POST /api/seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    /// Whether demo events were written by this call.
    pub seeded: bool,
    /// Explanation when nothing was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of events written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded => Self {
                seeded: false,
                message: Some("Events already exist".to_string()),
                inserted: None,
            },
            SeedOutcome::Inserted(count) => Self {
                seeded: true,
                message: None,
                inserted: Some(count),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_response_shapes() {
        let skipped = serde_json::to_value(SeedResponse::from(SeedOutcome::AlreadySeeded));
        assert!(skipped.is_ok_and(|v| v
            == serde_json::json!({ "seeded": false, "message": "Events already exist" })));

        let inserted = serde_json::to_value(SeedResponse::from(SeedOutcome::Inserted(3)));
        assert!(inserted.is_ok_and(|v| v == serde_json::json!({ "seeded": true, "inserted": 3 })));
    }

    #[test]
    fn params_convert_to_normalized_query() {
        let params = ListEventsParams {
            category: Some(String::new()),
            q: Some("neon".to_string()),
        };
        let query = EventQuery::from(params);
        assert_eq!(query.category(), None);
        assert_eq!(query.text(), Some("neon"));
    }
}
