//! Helper Proxy entry point

use anyhow::{Context, Result};
use helper_proxy::{create_routes, ProxyConfig};
use sleeper_provider::logging::initialize_logging;
use sleeper_provider::SleeperClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = ProxyConfig::from_env().context("Failed to load configuration")?;
    initialize_logging(&config.log_level, &config.log_format)?;

    info!("Starting Helper Proxy v{}", env!("CARGO_PKG_VERSION"));
    info!("Upstream: {}", config.helper.sleeper.api_base_url);
    match &config.helper.cache.players_path {
        Some(path) => info!(
            "Player catalog cache: {} ({}h window)",
            path.display(),
            config.helper.cache.max_age_hours
        ),
        None => info!("Player catalog cache disabled"),
    }

    let client =
        SleeperClient::from_config(&config.helper).context("Failed to create Sleeper client")?;
    let routes = create_routes(Arc::new(client), config.helper.trending.clone());

    info!("Listening on http://0.0.0.0:{}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
