//! Booking handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::BookingResponse;
use crate::api::extract::ValidatedJson;
use crate::app_state::AppState;
use crate::domain::Booking;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/book` — Book tickets for an existing event.
///
/// # Errors
///
/// Returns [`GatewayError`] on an invalid payload, a malformed or unknown
/// event id, or storage failure.
#[utoipa::path(
    post,
    path = "/api/book",
    tag = "Bookings",
    summary = "Create a booking",
    description = "Validates the booking, checks that the referenced event exists and stores the booking. Availability and capacity are not checked.",
    request_body = Booking,
    responses(
        (status = 200, description = "Booking stored", body = BookingResponse),
        (status = 400, description = "Malformed event id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "Invalid booking payload", body = ErrorResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(booking): ValidatedJson<Booking>,
) -> Result<impl IntoResponse, GatewayError> {
    let booking_id = state.booking_service.create_booking(&booking).await?;
    Ok(Json(BookingResponse::from(booking_id)))
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/book", post(create_booking))
}
