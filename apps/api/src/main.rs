mod aggregator;
mod config;
mod errors;
mod experience;
mod llm_client;
mod models;
mod profile;
mod ranking;
mod registry;
mod routes;
mod search;
mod sources;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::aggregator::JobAggregator;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::ranking::LlmScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let scorer = Arc::new(LlmScorer::new(llm.clone()));
    let aggregator = Arc::new(JobAggregator::new());
    info!(
        "Company registry loaded: {} Greenhouse, {} Lever boards",
        registry::GREENHOUSE_COMPANIES.len(),
        registry::LEVER_COMPANIES.len()
    );

    let state = AppState {
        aggregator,
        scorer,
        llm,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
