use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch};

pub struct PatchProductParams {
    pub id: i64,
    pub patch: ProductPatch,
}

#[async_trait]
pub trait PatchProductUseCase: Send + Sync {
    async fn execute(&self, params: PatchProductParams) -> Result<Product, ProductError>;
}
