use std::sync::Arc;

use shelfmark::config::AppConfig;
use shelfmark::repositories::InMemoryBookStore;
use shelfmark::server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logs
    tracing_subscriber::fmt::init();

    // Load centralized configuration
    let config = AppConfig::load()?;
    let addr = config.listen_addr()?;

    let store = Arc::new(InMemoryBookStore::new());
    let state = AppState::new(store, &config);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "shelfmark listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
    }
}
