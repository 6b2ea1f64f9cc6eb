use std::net::SocketAddr;
use std::sync::Arc;

use quote_service::{
    AppState, build_router,
    config::QuoteConfig,
    services::seed,
    store::{KeyValueStore, RedisStore},
};
use service_core::observability::logging::init_tracing;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = QuoteConfig::from_env()?;

    init_tracing(&config.service_name, &config.log_level);

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting quote service"
    );

    // The store is the only fatal dependency: without it there is nothing
    // to serve.
    let store: Arc<dyn KeyValueStore> = Arc::new(
        RedisStore::connect(&config.store.redis_url)
            .await
            .map_err(service_core::error::AppError::StoreError)?,
    );
    tracing::info!("Store initialized");

    let state = AppState::new(config.clone(), store.clone());

    // Startup housekeeping mirrors the curation rules: make sure the wall
    // has content, then sweep duplicates left over from earlier runs.
    // Neither failure is fatal - log and serve what is there.
    if config.store.seed_defaults {
        if let Err(e) = seed::seed_default_quotes(&store, &state.quotes).await {
            tracing::warn!(error = %e, "Seeding default quotes failed");
        }
    }
    match state.dedup.remove_duplicates().await {
        Ok(deleted) if deleted > 0 => {
            tracing::info!(deleted, "Startup dedup removed duplicates")
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Startup dedup failed"),
    }

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| {
            service_core::error::AppError::ConfigError(anyhow::anyhow!(e))
        })?;

    tracing::info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
