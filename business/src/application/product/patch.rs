use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::patch::{PatchProductParams, PatchProductUseCase};

pub struct PatchProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PatchProductUseCase for PatchProductUseCaseImpl {
    async fn execute(&self, params: PatchProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Patching product: {}", params.id));

        params.patch.validate()?;

        if !self
            .repository
            .merge_update(params.id, &params.patch)
            .await?
        {
            return Err(ProductError::NotFound);
        }

        let product = self
            .repository
            .search(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.logger.info(&format!("Product patched: {}", product.id));
        Ok(product)
    }
}
