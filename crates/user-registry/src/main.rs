//! User Registry - Main Entry Point
//!
//! Starts the registry actor and serves `/users` over HTTP until Ctrl+C or SIGTERM.

use tokio::signal;
use tracing::{error, info};

use resource_actor::tracing::setup_tracing;
use user_registry::http::{create_router, AppState};
use user_registry::lifecycle::RegistrySystem;
use user_registry::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    setup_tracing(&config.log_level);

    info!("Starting User Registry");
    info!("Configuration: {:?}", config);

    let system = RegistrySystem::new(config.channel_capacity);
    if config.seed_sample_users {
        system.seed_sample_users().await?;
    }

    let state = AppState::new(system.user_client.clone())
        .with_required_fields_on_update(config.require_fields_on_update);
    let router = create_router(state);

    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    info!("HTTP server listening on {}", http_addr);

    // Dropping the router on return releases its client clone
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");

    system.shutdown().await?;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
