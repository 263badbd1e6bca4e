use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductWithExtraData;
use crate::domain::product::repository::ProductQuery;
use crate::domain::product::services::ProductEnrichmentService;
use crate::domain::product::use_cases::list_enriched::{
    ListEnrichedProductsParams, ListEnrichedProductsUseCase,
};
use crate::domain::shared::pagination::Page;

use super::list::fetch_page;

pub struct ListEnrichedProductsUseCaseImpl {
    pub query: Arc<dyn ProductQuery>,
    /// `None` when no information service is configured.
    pub enrichment: Option<Arc<dyn ProductEnrichmentService>>,
    /// Upper bound for each individual lookup.
    pub lookup_timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListEnrichedProductsUseCase for ListEnrichedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: ListEnrichedProductsParams,
    ) -> Result<Page<ProductWithExtraData>, ProductError> {
        let page = fetch_page(self.query.as_ref(), params.page).await?;

        let Some(service) = &self.enrichment else {
            return Ok(page.map(|product| ProductWithExtraData {
                product,
                extra_data: None,
            }));
        };

        self.logger.info(&format!("Enriching {} products", page.results.len()));

        // One lookup per product, all in flight at once. Output order matches input order.
        let lookups = page.results.iter().map(|product| async move {
            match tokio::time::timeout(self.lookup_timeout, service.product_info(&product.name))
                .await
            {
                Ok(Ok(info)) => Some(info),
                Ok(Err(e)) => {
                    self.logger.warn(&format!(
                        "Product info lookup failed for {}: {}",
                        product.name, e
                    ));
                    None
                }
                Err(_) => {
                    self.logger.warn(&format!(
                        "Product info lookup timed out for {} after {:?}",
                        product.name, self.lookup_timeout
                    ));
                    None
                }
            }
        });
        let mut extra_data = join_all(lookups).await.into_iter();

        Ok(page.map(|product| ProductWithExtraData {
            product,
            extra_data: extra_data.next().flatten(),
        }))
    }
}
