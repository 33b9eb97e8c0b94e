//! # viewrd — viewr daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the key-value store (`SQLite` or in-memory) and run migrations
//! - Record the seed file's state changes, when one is configured
//! - Construct application services, injecting the store via the port trait
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use tracing_subscriber::EnvFilter;
use viewr_adapter_http_axum::router;
use viewr_adapter_http_axum::state::AppState;
use viewr_adapter_memory::InMemoryKvStore;
use viewr_adapter_storage_sqlite_sqlx::SqliteKvStore;
use viewr_app::ports::KeyValueStore;
use viewr_app::services::state_change_service::StateChangeService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.storage.backend {
        StorageBackend::Sqlite => {
            let store = SqliteKvStore::connect(&config.storage.database_url).await?;
            serve(&config, store).await
        }
        StorageBackend::Memory => serve(&config, InMemoryKvStore::new()).await,
    }
}

async fn serve<S>(config: &Config, store: S) -> Result<(), Box<dyn std::error::Error>>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    if let Some(path) = &config.seed.path {
        let changes = seed::load(path)?;
        StateChangeService::new(store.clone())
            .record_all(&changes)
            .await?;
    }

    let state = AppState::from_store(&store, config.handlers.details_miss);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        backend = ?config.storage.backend,
        details_miss = ?config.handlers.details_miss,
        "viewrd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("viewrd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
