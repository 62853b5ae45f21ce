//! # Cotacao Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the SQLite repository (creates `cotacoes` once)
//! - Build the upstream fetcher
//! - Start the HTTP server on `/cotacao`

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::build_repo;
use exchange_rates::AwesomeApiFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting quote server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Upstream quote API: {}", config.quote_api_url);

    // Build repository (handles connection and table creation)
    let repo = build_repo(&config.database_url).await?;
    let fetcher = AwesomeApiFetcher::new(&config.quote_api_url);

    let service = QuoteService::new(fetcher, repo);

    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
