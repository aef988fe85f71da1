//! Profile API
//!
//! Serves a fixed profile together with a fact fetched from an external
//! service.

use std::future::IntoFuture;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_api::{api, AppState, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profile_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.server.socket_addr()?;
    tracing::info!(
        "Starting profile API on {}:{}",
        config.server.host,
        config.server.port
    );

    let state = AppState::new(config)?;
    let app = api::app(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("========================================");
    tracing::info!("  Server is running!");
    tracing::info!("  Port: {}", addr.port());
    tracing::info!("  Local: http://localhost:{}", addr.port());
    tracing::info!("  Endpoint: http://localhost:{}/me", addr.port());
    tracing::info!("========================================");

    // Interrupt ends the process without draining in-flight requests.
    tokio::select! {
        served = axum::serve(listener, app).into_future() => served?,
        _ = shutdown_signal() => {
            tracing::info!("Shutting down gracefully...");
        }
    }

    Ok(())
}

/// Resolve once Ctrl+C (SIGINT) is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C signal: {}", err);
        std::future::pending::<()>().await;
    }
}
