//! Process lifecycle: open the store, upgrade the schema, serve until Ctrl-C.

use crate::config::{AppConfig, ENV_VAR};
use crate::routes::app;
use crate::state::AppState;
use crate::store::ThingStore;
use tokio::net::TcpListener;

pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("{}: {}", ENV_VAR, config.environment.name());
    let store = ThingStore::connect(&config).await?;
    store.auto_upgrade().await?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(store.clone())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("store closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
