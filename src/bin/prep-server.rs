//! Generation server: `POST /api/chat` and the interview read routes

use anyhow::{Context, Result};
use interview_prep::integration::AppConfig;
use interview_prep::llm::GeminiGenerator;
use interview_prep::server::{router, GenerationService, JsonFileStore, ServerState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_prep=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    if config.llm.api_key.is_none() {
        warn!("GOOGLE_GENERATIVE_AI_API_KEY is not set; generation requests will fail");
    }

    let store = JsonFileStore::open(&config.server.store_dir)
        .await
        .context("failed to open interview store")?;
    info!("Storing interviews in {}", store.dir().display());

    let service = GenerationService::new(
        Arc::new(GeminiGenerator::new(config.llm.clone())),
        Arc::new(store),
    );
    let app = router(Arc::new(ServerState::new(service)));

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "starting generation server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("generation server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
    }
}
