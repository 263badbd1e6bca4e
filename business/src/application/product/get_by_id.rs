use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product: {}", params.id));
        self.repository
            .search(params.id)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, make_product, mock_logger};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .withf(|id| *id == 3)
            .returning(|id| Ok(Some(make_product(id, "Rice"))));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Rice");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_search().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 999 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_unavailable_storage() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_search()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}
