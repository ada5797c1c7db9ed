use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use hotels::modules::hotels::adapters::outbound::store_in_memory::InMemoryStore;
use hotels::shell::config::AppConfig;
use hotels::shell::http::router;
use hotels::shell::seed::seed_demo_data;
use hotels::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryStore::new());
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
    }

    let app = router(AppState::new(store), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr))?;
    tracing::info!("hotels API: http://{}/hotels", config.http_addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
