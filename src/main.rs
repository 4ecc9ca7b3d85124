//! event-booking-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use event_booking_gateway::api;
use event_booking_gateway::app_state::AppState;
use event_booking_gateway::config::{GatewayConfig, LogFormat};
use event_booking_gateway::persistence::Storage;
use event_booking_gateway::service::BookingService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(
        addr = %config.listen_addr,
        database = %config.database_name,
        "starting event-booking-gateway"
    );

    // Build storage and service layer
    let storage = Storage::connect(&config).await;
    let app_state = AppState::new(BookingService::new(storage));

    // Build router
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
