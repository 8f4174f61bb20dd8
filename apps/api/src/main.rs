mod config;
mod errors;
mod llm_client;
mod prompting;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{select_provider, AnthropicClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Promptcraft API v{}", env!("CARGO_PKG_VERSION"));

    // Raw client for the proxy route; also the fallback completion provider
    let anthropic = config
        .anthropic_api_key
        .clone()
        .map(AnthropicClient::new)
        .transpose()?;
    if anthropic.is_some() {
        info!("Anthropic client initialized");
    }

    let completion = select_provider(&config, anthropic.as_ref())?;

    info!(
        "Input limit: {} characters per field",
        config.max_input_chars
    );

    let state = AppState {
        config: config.clone(),
        completion,
        anthropic,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
