use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client for the product information service.
pub struct ProductInfoClient {
    pub client: Client,
    pub base_url: String,
}

impl ProductInfoClient {
    /// `timeout` bounds every request at the transport level; callers may
    /// apply a tighter bound per lookup.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product info endpoint URL.
    pub fn product_info_url(&self) -> String {
        format!("{}/products/info", self.base_url)
    }
}
