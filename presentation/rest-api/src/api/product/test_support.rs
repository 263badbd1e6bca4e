use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductPatch, ProductPayload};
use business::domain::product::repository::{ProductQuery, ProductRepository};
use business::domain::product::services::ProductEnrichmentService;
use business::domain::shared::pagination::PageRequest;
use logger::TracingLogger;

use crate::api::product::routes::ProductApi;
use crate::setup::dependency_injection::build_product_api;

/// Wires a `ProductApi` over `store` with enrichment disabled.
pub fn product_api_with<S>(store: Arc<S>) -> ProductApi
where
    S: ProductRepository + ProductQuery + 'static,
{
    product_api_with_enrichment(store, None)
}

pub fn product_api_with_enrichment<S>(
    store: Arc<S>,
    enrichment: Option<Arc<dyn ProductEnrichmentService>>,
) -> ProductApi
where
    S: ProductRepository + ProductQuery + 'static,
{
    build_product_api(
        store.clone(),
        store,
        enrichment,
        Duration::from_millis(50),
        Arc::new(TracingLogger),
    )
}

/// Answers `{"origin": <name>}`, failing for names listed in `unknown`.
pub struct StubEnrichment {
    pub unknown: Vec<&'static str>,
}

#[async_trait]
impl ProductEnrichmentService for StubEnrichment {
    async fn product_info(&self, product_name: &str) -> Result<serde_json::Value, ProductError> {
        if self.unknown.iter().any(|name| *name == product_name) {
            return Err(ProductError::EnrichmentFailed);
        }
        Ok(serde_json::json!({ "origin": product_name }))
    }
}

/// Products kept in id order, ids handed out from 1.
pub struct InMemoryProductStore {
    products: Mutex<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self {
            products: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        })
    }

    fn with_products<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<i64, Product>) -> T,
    ) -> Result<T, RepositoryError> {
        let mut products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::Unavailable)?;
        Ok(f(&mut products))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn search(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        self.with_products(|products| products.get(&id).cloned())
    }

    async fn insert(&self, payload: &ProductPayload) -> Result<Product, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let product = Product::from_repository(
            id,
            payload.name.clone(),
            payload.description.clone(),
            payload.price,
            now,
            now,
        );
        self.with_products(|products| {
            products.insert(id, product.clone());
            product
        })
    }

    async fn replace(&self, id: i64, payload: &ProductPayload) -> Result<bool, RepositoryError> {
        self.with_products(|products| match products.get_mut(&id) {
            Some(product) => {
                product.name = payload.name.clone();
                product.description = payload.description.clone();
                product.price = payload.price;
                product.updated_at = Utc::now();
                true
            }
            None => false,
        })
    }

    async fn merge_update(&self, id: i64, patch: &ProductPatch) -> Result<bool, RepositoryError> {
        self.with_products(|products| match products.get_mut(&id) {
            Some(product) => {
                if !patch.is_empty() {
                    patch.apply(product);
                    product.updated_at = Utc::now();
                }
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        self.with_products(|products| products.remove(&id).is_some())
    }
}

#[async_trait]
impl ProductQuery for InMemoryProductStore {
    async fn fetch_window(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        let offset = usize::try_from(request.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
        self.with_products(|products| {
            products
                .values()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect()
        })
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        self.with_products(|products| products.len() as u64)
    }
}

/// A store whose backend is always down.
pub struct FailingStore;

impl FailingStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl ProductRepository for FailingStore {
    async fn search(&self, _id: i64) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn insert(&self, _payload: &ProductPayload) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn replace(&self, _id: i64, _payload: &ProductPayload) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn merge_update(&self, _id: i64, _patch: &ProductPatch) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn delete(&self, _id: i64) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}

#[async_trait]
impl ProductQuery for FailingStore {
    async fn fetch_window(&self, _request: &PageRequest) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with(names: &[&str]) -> Arc<InMemoryProductStore> {
        let store = InMemoryProductStore::shared();
        for name in names {
            let payload = ProductPayload::new(name.to_string(), None, 1.0).unwrap();
            store.insert(&payload).await.unwrap();
        }
        store
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn should_return_window_in_id_order() {
        let store = store_with(&["A", "B", "C", "D"]).await;

        let window = store
            .fetch_window(&PageRequest::new(Some(1), Some(2)))
            .await
            .unwrap();

        assert_eq!(names(&window), vec!["B", "C"]);
    }

    #[tokio::test]
    async fn should_return_empty_window_past_the_end_or_for_zero_limit() {
        let store = store_with(&["A", "B"]).await;

        let past_end = store
            .fetch_window(&PageRequest::new(Some(2), Some(10)))
            .await
            .unwrap();
        let zero_limit = store
            .fetch_window(&PageRequest::new(Some(0), Some(0)))
            .await
            .unwrap();

        assert!(past_end.is_empty());
        assert!(zero_limit.is_empty());
        assert_eq!(store.count_all().await.unwrap(), 2);
    }
}
