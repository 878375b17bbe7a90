// clean-uppalapadu/src/main.rs
mod config;
mod content;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod templates;
mod utils;

use crate::config::Config;
use crate::middleware::cache::PageCache;
use crate::routes::create_router;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub struct AppState {
    pub config: Config,
    pub pages: PageCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let pages = PageCache::new(config.page_cache_capacity, config.page_cache_ttl());
        Self { config, pages }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting Clean Uppalapadu server...");

    let config = Config::from_env()?;
    let addr = config.server_addr()?;

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found; stylesheets will 404",
            config.static_dir.display()
        );
    }

    let state = Arc::new(AppState::new(config));
    let app = create_router(state.clone());

    tracing::info!("✅ Listening on {}", addr);
    tracing::info!("🌐 Web UI: http://{}", addr);
    tracing::info!(
        "🗂️  Page cache: {} entries, {}s TTL",
        state.config.page_cache_capacity,
        state.config.page_cache_ttl_secs
    );
    if state.config.enable_hsts {
        tracing::info!("🔒 HSTS enabled");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
