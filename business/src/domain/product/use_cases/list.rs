use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct ListProductsParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError>;
}
