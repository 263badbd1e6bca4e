use async_trait::async_trait;

use business::domain::product::errors::ProductError;
use business::domain::product::services::ProductEnrichmentService;

use crate::client::ProductInfoClient;

/// Looks up extra product data by name: `GET {base_url}/products/info?name=…`.
pub struct ProductInfoHttp {
    client: ProductInfoClient,
}

impl ProductInfoHttp {
    pub fn new(client: ProductInfoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductEnrichmentService for ProductInfoHttp {
    async fn product_info(&self, product_name: &str) -> Result<serde_json::Value, ProductError> {
        let response = self
            .client
            .client
            .get(self.client.product_info_url())
            .query(&[("name", product_name)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(product_name, error = %e, "product info request failed");
                ProductError::EnrichmentFailed
            })?;

        if !response.status().is_success() {
            tracing::warn!(
                product_name,
                status = %response.status(),
                "product info service returned an error status"
            );
            return Err(ProductError::EnrichmentFailed);
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::warn!(product_name, error = %e, "product info response is not JSON");
            ProductError::EnrichmentFailed
        })
    }
}
