//! Product API - A small CRUD REST service for products
//!
//! Binary entry point: wires configuration, database, cache and router.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_api::{create_router, spawn_cache_clear_task, AppState, Config, Database};

/// Main entry point for the product service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to the database, create the schema, optionally seed it
/// 4. Build the shared cache and product service
/// 5. Start the scheduled cache clear task
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Product API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, database={}, cache_clear_interval={}s, invalidate_on_write={}",
        config.server_port,
        config.database_url,
        config.cache_clear_interval,
        config.invalidate_on_write
    );

    let database = Database::from_config(&config)
        .await
        .with_context(|| format!("failed to connect to {}", config.database_url))?;
    database
        .create_schema()
        .await
        .context("failed to create product schema")?;
    if config.seed_sample_data {
        database
            .seed_sample_data()
            .await
            .context("failed to seed sample products")?;
    }

    let state = AppState::from_config(&config, &database);
    info!("Product service initialized");

    let clear_handle = spawn_cache_clear_task(state.cache.clone(), config.cache_clear_interval);
    info!("Cache clear task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(clear_handle))
        .await
        .context("server error")?;

    database.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cache clear task and allows graceful shutdown.
async fn shutdown_signal(clear_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    clear_handle.abort();
    warn!("Cache clear task aborted");
}
