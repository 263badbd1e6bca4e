use async_trait::async_trait;

use super::errors::ProductError;

/// Service port for the external product information lookup, keyed by name.
#[async_trait]
pub trait ProductEnrichmentService: Send + Sync {
    async fn product_info(&self, product_name: &str) -> Result<serde_json::Value, ProductError>;
}
