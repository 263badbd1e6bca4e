use std::env;
use std::time::Duration;

use super::env_or;

const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Product information service settings
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Base URL of the service; enrichment is disabled when unset.
    pub service_url: Option<String>,
    /// Upper bound for a single lookup.
    pub timeout: Duration,
}

impl EnrichmentConfig {
    /// Environment variables:
    /// - ENRICHMENT_SERVICE_URL: base URL (optional)
    /// - ENRICHMENT_TIMEOUT_MS: per-lookup timeout (default: 2000)
    pub fn from_env() -> Self {
        let service_url = env::var("ENRICHMENT_SERVICE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            service_url,
            timeout: Duration::from_millis(env_or("ENRICHMENT_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)),
        }
    }
}
