use std::sync::Arc;
use std::time::Duration;

use enrichment::client::ProductInfoClient;
use enrichment::product_info::ProductInfoHttp;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::list_enriched::ListEnrichedProductsUseCaseImpl;
use business::application::product::patch::PatchProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::{ProductQuery, ProductRepository};
use business::domain::product::services::ProductEnrichmentService;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::enrichment_config::EnrichmentConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, enrichment_config: &EnrichmentConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        let enrichment: Option<Arc<dyn ProductEnrichmentService>> =
            match &enrichment_config.service_url {
                Some(url) => {
                    tracing::info!(url = %url, "Product enrichment enabled");
                    let client = ProductInfoClient::new(url.clone(), enrichment_config.timeout);
                    let service: Arc<dyn ProductEnrichmentService> =
                        Arc::new(ProductInfoHttp::new(client));
                    Some(service)
                }
                None => {
                    tracing::info!("Product enrichment disabled, ENRICHMENT_SERVICE_URL not set");
                    None
                }
            };

        let product_api = build_product_api(
            product_repository.clone(),
            product_repository,
            enrichment,
            enrichment_config.timeout,
            logger,
        );

        Self {
            health_api: HealthApi,
            product_api,
        }
    }
}

/// Builds the product use cases over the given ports and hands them to the API.
pub fn build_product_api(
    repository: Arc<dyn ProductRepository>,
    query: Arc<dyn ProductQuery>,
    enrichment: Option<Arc<dyn ProductEnrichmentService>>,
    lookup_timeout: Duration,
    logger: Arc<dyn Logger>,
) -> ProductApi {
    let list_use_case = Arc::new(ListProductsUseCaseImpl {
        query: query.clone(),
        logger: logger.clone(),
    });
    let list_enriched_use_case = Arc::new(ListEnrichedProductsUseCaseImpl {
        query,
        enrichment,
        lookup_timeout,
        logger: logger.clone(),
    });
    let create_use_case = Arc::new(CreateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let update_use_case = Arc::new(UpdateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let patch_use_case = Arc::new(PatchProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let delete_use_case = Arc::new(DeleteProductUseCaseImpl { repository, logger });

    ProductApi::new(
        list_use_case,
        list_enriched_use_case,
        create_use_case,
        get_by_id_use_case,
        update_use_case,
        patch_use_case,
        delete_use_case,
    )
}
