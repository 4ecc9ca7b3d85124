//! System endpoints: liveness, health check and storage diagnostics.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::persistence::{ConnectionState, StorageStatus};

/// Longest storage error excerpt echoed by the diagnostics endpoint.
const ERROR_EXCERPT_CHARS: usize = 80;

/// Liveness response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Fixed liveness message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Server time, RFC 3339.
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}

/// Storage diagnostics response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    /// Backend process status.
    pub backend: String,
    /// Database status in words.
    pub database: String,
    /// Whether `DATABASE_URL` was supplied (`"set"` / `"not set"`).
    pub database_url: String,
    /// Name of the attached database.
    pub database_name: Option<String>,
    /// `"Connected"` or `"Not Connected"`.
    pub connection_status: String,
    /// Collections present in the database.
    pub collections: Vec<String>,
}

impl From<StorageStatus> for DiagnosticsResponse {
    fn from(status: StorageStatus) -> Self {
        let database_url = if status.url_configured {
            "set"
        } else {
            "not set"
        };
        let (database, connection_status) = match &status.state {
            ConnectionState::Unavailable if status.url_configured => {
                ("configured but unreachable".to_string(), "Not Connected")
            }
            ConnectionState::Unavailable => ("not configured".to_string(), "Not Connected"),
            ConnectionState::Connected => ("connected and working".to_string(), "Connected"),
            ConnectionState::Degraded(error) => {
                let excerpt: String = error.chars().take(ERROR_EXCERPT_CHARS).collect();
                (format!("connected but error: {excerpt}"), "Not Connected")
            }
        };

        Self {
            backend: "running".to_string(),
            database,
            database_url: database_url.to_string(),
            database_name: status.database_name,
            connection_status: connection_status.to_string(),
            collections: status.collections,
        }
    }
}

/// `GET /` — Liveness message.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Liveness",
    responses(
        (status = 200, description = "Service is running", body = RootResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "Event Booking Backend is running".to_string(),
    })
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /test` — Storage connectivity diagnostics.
#[utoipa::path(
    get,
    path = "/test",
    tag = "System",
    summary = "Storage diagnostics",
    description = "Reports whether the document store is configured and reachable, and which collections exist. Informational only; always 200.",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsResponse),
    )
)]
pub async fn diagnostics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.booking_service.storage().status().await;
    Json(DiagnosticsResponse::from(status))
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/test", get(diagnostics_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(url_configured: bool, state: ConnectionState) -> StorageStatus {
        StorageStatus {
            url_configured,
            database_name: None,
            state,
            collections: Vec::new(),
        }
    }

    #[test]
    fn unconfigured_storage_is_reported() {
        let report = DiagnosticsResponse::from(status(false, ConnectionState::Unavailable));
        assert_eq!(report.backend, "running");
        assert_eq!(report.database, "not configured");
        assert_eq!(report.database_url, "not set");
        assert_eq!(report.connection_status, "Not Connected");
    }

    #[test]
    fn unreachable_storage_is_distinguished() {
        let report = DiagnosticsResponse::from(status(true, ConnectionState::Unavailable));
        assert_eq!(report.database, "configured but unreachable");
        assert_eq!(report.database_url, "set");
    }

    #[test]
    fn degraded_error_is_truncated() {
        let long = "x".repeat(200);
        let report = DiagnosticsResponse::from(status(true, ConnectionState::Degraded(long)));
        let prefix = "connected but error: ";
        assert_eq!(report.database.len(), prefix.len() + ERROR_EXCERPT_CHARS);
    }
}
