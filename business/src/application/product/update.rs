use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPayload};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let payload = ProductPayload::new(params.name, params.description, params.price)?;

        if !self.repository.replace(params.id, &payload).await? {
            return Err(ProductError::NotFound);
        }

        // A concurrent delete can land between the write and this read.
        let product = self
            .repository
            .search(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger};
    use chrono::Utc;
    use mockall::Sequence;
    use std::sync::Mutex;

    #[tokio::test]
    async fn should_overwrite_every_field_when_product_exists() {
        let stored = Arc::new(Mutex::new(None::<ProductPayload>));
        let written = stored.clone();
        let mut mock_repo = MockProductRepo::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_replace()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_, payload| {
                *written.lock().unwrap() = Some(payload.clone());
                Ok(true)
            });
        mock_repo
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |id| {
                let payload = stored.lock().unwrap().clone().unwrap();
                Ok(Some(Product::from_repository(
                    id,
                    payload.name,
                    payload.description,
                    payload.price,
                    Utc::now(),
                    Utc::now(),
                )))
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: 5,
                name: "Updated Olive Oil".to_string(),
                description: None,
                price: 7.5,
            })
            .await
            .unwrap();

        assert_eq!(product.id, 5);
        assert_eq!(product.name, "Updated Olive Oil");
        assert_eq!(product.description, None);
        assert_eq!(product.price, 7.5);
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_replace().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 1,
                name: " ".to_string(),
                description: None,
                price: 1.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_replace().returning(|_, _| Ok(false));
        mock_repo.expect_search().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 999,
                name: "Something".to_string(),
                description: None,
                price: 1.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleted_before_reread() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_replace().returning(|_, _| Ok(true));
        mock_repo.expect_search().returning(|_| Ok(None));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 8,
                name: "Something".to_string(),
                description: None,
                price: 1.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
