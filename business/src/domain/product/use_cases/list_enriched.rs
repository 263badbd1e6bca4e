use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductWithExtraData;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct ListEnrichedProductsParams {
    pub page: PageRequest,
}

#[async_trait]
pub trait ListEnrichedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListEnrichedProductsParams,
    ) -> Result<Page<ProductWithExtraData>, ProductError>;
}
