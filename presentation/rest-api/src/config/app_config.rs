use super::{cors_config, enrichment_config::EnrichmentConfig, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub enrichment: EnrichmentConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            enrichment: EnrichmentConfig::from_env(),
        }
    }
}
