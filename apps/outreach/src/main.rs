mod assets;
mod config;
mod errors;
mod html;
mod models;
mod pages;
mod preview;
mod router;
mod routes;
mod scroll;
mod session;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting outreach demo v{}", env!("CARGO_PKG_VERSION"));

    // Static bundle
    for missing in assets::missing_assets(&config.assets_dir) {
        warn!(
            "Asset '{missing}' not found in {}",
            config.assets_dir.display()
        );
    }

    // Initialize client store
    let store = match config.store_quota_bytes {
        0 => {
            info!("Client store initialized (no quota)");
            Arc::new(MemoryStore::new())
        }
        quota => {
            info!("Client store initialized (quota: {quota} bytes)");
            Arc::new(MemoryStore::with_quota(quota))
        }
    };

    // Build app state
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
