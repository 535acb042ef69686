//! wage-gap-engine server entry point.
//!
//! Sets up tracing, loads the reference data, wires the optional Gemini
//! provider, and serves the HTTP API.

use std::{error::Error, net::SocketAddr, sync::Arc, time::Duration};

use tracing::{info, warn};
use wage_gap_engine::api::{AppState, create_router};
use wage_gap_engine::config::ReferenceLoader;
use wage_gap_engine::provider::{GeminiConfig, GeminiProvider, MarketDataProvider};

const DEFAULT_REFERENCE_DIR: &str = "./config/reference";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let reference_dir =
        std::env::var("WAGE_GAP_REFERENCE_DIR").unwrap_or_else(|_| DEFAULT_REFERENCE_DIR.into());
    let reference = ReferenceLoader::load(&reference_dir)?.into_data();

    let mut state = AppState::new(reference);
    match provider_from_env() {
        Some(provider) => {
            info!(provider = provider.provider_name(), "Live market data enabled");
            state = state.with_provider(provider);
        }
        None => warn!("GEMINI_API_KEY not set; analyses will use reference data only"),
    }

    let app = create_router(state);

    let addr = bind_addr_from_env().unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));
    info!("wage-gap-engine listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn bind_addr_from_env() -> Option<SocketAddr> {
    let raw = std::env::var("WAGE_GAP_ADDR").ok()?;
    parse_bind_addr(&raw)
}

fn parse_bind_addr(raw: &str) -> Option<SocketAddr> {
    match raw.trim().parse() {
        Ok(addr) => Some(addr),
        Err(err) => {
            warn!(value = raw, error = %err, "Ignoring unparseable WAGE_GAP_ADDR");
            None
        }
    }
}

fn provider_from_env() -> Option<Arc<dyn MarketDataProvider>> {
    let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty())?;

    let timeout_secs = std::env::var("MARKET_DATA_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let mut config = GeminiConfig::new(api_key).with_timeout(Duration::from_secs(timeout_secs));
    if let Ok(model) = std::env::var("GEMINI_MODEL") {
        config = config.with_model(model);
    }
    if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    match GeminiProvider::new(config) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(err) => {
            warn!(error = %err, "Failed to build market-data client");
            None
        }
    }
}
