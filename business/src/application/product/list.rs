use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductQuery;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct ListProductsUseCaseImpl {
    pub query: Arc<dyn ProductQuery>,
    pub logger: Arc<dyn Logger>,
}

/// Reads the window and the total as two independent queries.
///
/// They are not wrapped in a transaction: a write landing between them can
/// make `total` disagree with the returned slice.
pub(crate) async fn fetch_page(
    query: &dyn ProductQuery,
    request: PageRequest,
) -> Result<Page<Product>, RepositoryError> {
    let results = if request.limit == 0 {
        Vec::new()
    } else {
        query.fetch_window(&request).await?
    };
    let total = query.count_all().await?;

    Ok(Page::new(results, total, request))
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError> {
        self.logger.info(&format!(
            "Listing products: offset={} limit={}",
            params.page.offset, params.page.limit
        ));
        let page = fetch_page(self.query.as_ref(), params.page).await?;
        self.logger.info(&format!(
            "Found {} of {} products",
            page.results.len(),
            page.total
        ));
        Ok(page)
    }
}
