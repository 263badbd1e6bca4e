use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::PageRequest;

use super::model::{Product, ProductPatch, ProductPayload};

/// Entity store for products.
///
/// Mutations report whether a row matched instead of failing on a miss.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, payload: &ProductPayload) -> Result<Product, RepositoryError>;
    async fn replace(&self, id: i64, payload: &ProductPayload) -> Result<bool, RepositoryError>;
    async fn merge_update(&self, id: i64, patch: &ProductPatch) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

/// Read side used for pagination: a window ordered by id and the unfiltered count.
#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn fetch_window(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError>;
    async fn count_all(&self) -> Result<u64, RepositoryError>;
}
