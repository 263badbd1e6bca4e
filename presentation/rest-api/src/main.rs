mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, logging_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database, enrichment)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env and initialize tracing with RUST_LOG env filter
    logging_config::init_logging();

    // 2. Load configuration
    let config = AppConfig::from_env();

    // 3. Initialize database
    let pool = database_config::init_database().await?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(pool, &config.enrichment);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
