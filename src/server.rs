//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, spawns the sweep worker and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::RegistryService;
use crate::application::sweep_worker::run_sweep_worker;
use crate::config::Config;
use crate::infrastructure::memory::InMemoryEntryRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory registry
/// - Background sweep worker
/// - Axum HTTP server with graceful shutdown
///
/// On Ctrl+C or SIGTERM the server stops accepting connections, drains
/// in-flight requests, then signals the sweep worker and waits for it.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(InMemoryEntryRepository::new());
    let registry = Arc::new(RegistryService::new(repository));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = tokio::spawn(run_sweep_worker(
        registry.clone(),
        config.link_ttl(),
        config.sweep_interval(),
        shutdown_rx,
    ));

    let state = AppState::new(registry, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The worker may already be gone; a failed send is fine.
    let _ = shutdown_tx.send(true);
    sweeper.await?;

    info!("Shutdown complete");

    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
