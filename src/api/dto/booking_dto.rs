//! Booking DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DocumentId;

/// Response body for `POST /api/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    /// Always `true` on success.
    pub ok: bool,
    /// Hex id of the new booking.
    pub booking_id: String,
}

impl From<DocumentId> for BookingResponse {
    fn from(id: DocumentId) -> Self {
        Self {
            ok: true,
            booking_id: id.to_string(),
        }
    }
}
