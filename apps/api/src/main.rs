mod analysis;
mod config;
mod errors;
mod llm_client;
mod models;
mod neynar;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::neynar::NeynarClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Founder Lens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Farcaster content client
    let farcaster = NeynarClient::new(config.neynar_api_key.clone());
    info!("Neynar client initialized");

    // Initialize Gemini client. A missing credential degrades the client
    // rather than crashing: requests fail with a provider error until the
    // key is supplied.
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    if !llm.is_configured() {
        warn!("Missing GEMINI_API_KEY — analysis requests will fail until it is set");
    } else {
        info!("Gemini client initialized (model: {})", llm_client::MODEL);
    }

    // Build app state
    let state = AppState {
        farcaster: Arc::new(farcaster),
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // frame UI is a browser client

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
