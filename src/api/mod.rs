//! REST API layer: route handlers, DTOs, extractors and router composition.
//!
//! Data endpoints are mounted under `/api`; liveness and diagnostics sit at
//! the root.

pub mod doc;
pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the servable application: routes, API docs, tracing and CORS,
/// bound to `state`.
///
/// CORS mirrors the request origin and allows credentials, so any site may
/// call the API with cookies attached.
pub fn build_app(state: AppState) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", doc::ApiDoc::openapi()),
        )
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::very_permissive()),
        )
        .with_state(state)
}
