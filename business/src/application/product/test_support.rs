use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch, ProductPayload};
use crate::domain::product::repository::{ProductQuery, ProductRepository};
use crate::domain::product::services::ProductEnrichmentService;
use crate::domain::shared::pagination::PageRequest;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn search(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
        async fn insert(&self, payload: &ProductPayload) -> Result<Product, RepositoryError>;
        async fn replace(&self, id: i64, payload: &ProductPayload) -> Result<bool, RepositoryError>;
        async fn merge_update(&self, id: i64, patch: &ProductPatch) -> Result<bool, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ProductQueryRepo {}

    #[async_trait]
    impl ProductQuery for ProductQueryRepo {
        async fn fetch_window(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError>;
        async fn count_all(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Enrichment {}

    #[async_trait]
    impl ProductEnrichmentService for Enrichment {
        async fn product_info(&self, product_name: &str) -> Result<serde_json::Value, ProductError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: i64, name: &str) -> Product {
    let now = Utc::now();
    Product::from_repository(id, name.to_string(), None, 1.0, now, now)
}
