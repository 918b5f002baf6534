//! banner-server: version banner HTTP server binary entrypoint.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use banner_server::config::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::from_env().expect("Invalid configuration");

    // Initialize tracing. RUST_LOG wins; otherwise debug mode widens the
    // default filter.
    let default_filter = if config.debug {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log startup info
    if config.debug {
        tracing::warn!("Debug mode enabled, not suitable for production");
    }
    tracing::info!("Serving application version {}", config.version);

    // Build application
    let app = banner_server::build_app(&config);

    // Start server
    let addr = SocketAddr::new(config.bind_address, config.port);
    tracing::info!("Starting banner server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
