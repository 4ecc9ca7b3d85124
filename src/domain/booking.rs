//! Booking schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A customer's request for tickets against a specific event.
///
/// `event_id` is kept as the raw client string; it is parsed into a
/// [`super::DocumentId`] only when the referenced event is looked up, so a
/// malformed id is reported as such rather than as a schema failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Booking {
    /// Hex id of the event being booked.
    pub event_id: String,
    /// Full name of the customer.
    pub name: String,
    /// Customer email.
    #[validate(email)]
    pub email: String,
    /// Number of tickets, 1 through 12.
    #[validate(range(min = 1, max = 12))]
    pub quantity: i64,
    /// Special requests.
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(quantity: i64) -> Booking {
        Booking {
            event_id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            quantity,
            notes: None,
        }
    }

    #[test]
    fn quantity_bounds_are_inclusive() {
        assert!(booking(1).validate().is_ok());
        assert!(booking(12).validate().is_ok());
    }

    #[test]
    fn quantity_outside_bounds_is_rejected() {
        for quantity in [0, 13, -1] {
            let result = booking(quantity).validate();
            assert!(
                result.is_err_and(|e| e.field_errors().contains_key("quantity")),
                "quantity {quantity} should be rejected"
            );
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut b = booking(2);
        b.email = "not-an-email".to_string();
        let result = b.validate();
        assert!(result.is_err_and(|e| e.field_errors().contains_key("email")));
    }

    #[test]
    fn notes_are_optional_on_the_wire() {
        let json = r#"{"event_id":"x","name":"N","email":"n@example.com","quantity":3}"#;
        let parsed = serde_json::from_str::<Booking>(json);
        assert!(parsed.is_ok_and(|b| b.notes.is_none() && b.quantity == 3));
    }

    #[test]
    fn missing_email_fails_to_parse() {
        let json = r#"{"event_id":"x","name":"N","quantity":3}"#;
        assert!(serde_json::from_str::<Booking>(json).is_err());
    }
}
