//! Event handlers: list and seed.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{ListEventsParams, SeedResponse};
use crate::app_state::AppState;
use crate::domain::{Event, EventQuery};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /api/events` — List events, optionally filtered.
///
/// # Errors
///
/// Returns [`GatewayError`] if storage is unavailable or the read fails.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every event matching the optional category and free-text filters. Identifiers are not exposed and no pagination is applied.",
    params(ListEventsParams),
    responses(
        (status = 200, description = "Matching events", body = Vec<Event>),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let query = EventQuery::from(params);
    let events = state.booking_service.list_events(&query).await?;
    Ok(Json(events))
}

/// `POST /api/seed` — Insert the demo catalogue into an empty store.
///
/// # Errors
///
/// Returns [`GatewayError`] if storage is unavailable or a write fails.
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "Events",
    summary = "Seed demo events",
    description = "Inserts a fixed set of demo events when the event collection is empty; otherwise does nothing.",
    responses(
        (status = 200, description = "Seed outcome", body = SeedResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn seed_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let outcome = state.booking_service.seed_demo_events().await?;
    Ok(Json(SeedResponse::from(outcome)))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/seed", post(seed_events))
}
