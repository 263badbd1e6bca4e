#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("product.enrichment_failed")]
    EnrichmentFailed,
    #[error("{0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
