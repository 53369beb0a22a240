//! Hoptub dashboard server
//!
//! Entry point: loads configuration, initializes tracing, serves the router.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hoptub_dashboard::config::AppConfig;
use hoptub_dashboard::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before reading env overrides
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    tracing::info!(
        name: "config.loaded",
        port = config.server.port,
        gateway = config.gateway.endpoint().unwrap_or("placeholder"),
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}
