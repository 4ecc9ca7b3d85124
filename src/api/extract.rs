//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::GatewayError;

/// JSON body that is deserialized and then validated.
///
/// Shape errors (missing fields, wrong types, bad JSON) become
/// [`GatewayError::MalformedPayload`]; rule violations become
/// [`GatewayError::Validation`] with field-level details. Either way the
/// handler never runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::MalformedPayload(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
