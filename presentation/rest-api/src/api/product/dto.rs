use chrono::{DateTime, Utc};
use poem_openapi::{Object, types::MaybeUndefined};

use business::domain::product::model::{Product, ProductPatch, ProductWithExtraData};
use business::domain::shared::pagination::Page;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Unit price (zero or positive)
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-form description; omitted or null clears it
    pub description: Option<String>,
    /// Unit price (zero or positive)
    pub price: f64,
}

/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct PatchProductRequest {
    /// New name (cannot be empty)
    pub name: Option<String>,
    /// New description; `null` clears it
    pub description: MaybeUndefined<String>,
    /// New unit price
    pub price: Option<f64>,
}

impl From<PatchProductRequest> for ProductPatch {
    fn from(request: PatchProductRequest) -> Self {
        let description = match request.description {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(description) => Some(Some(description)),
        };

        Self {
            name: request.name,
            description,
            price: request.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier assigned on creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginatedProductResponse {
    /// Products in the requested window, ordered by id
    pub results: Vec<ProductResponse>,
    /// Number of products in the whole collection
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl From<Page<Product>> for PaginatedProductResponse {
    fn from(page: Page<Product>) -> Self {
        let page = page.map(ProductResponse::from);
        Self {
            results: page.results,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

// --- DTOs for enriched listing ---

#[derive(Debug, Clone, Object)]
pub struct ProductWithExtraDataResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Data from the product information service; null when unavailable
    pub extra_data: Option<serde_json::Value>,
}

impl From<ProductWithExtraData> for ProductWithExtraDataResponse {
    fn from(item: ProductWithExtraData) -> Self {
        let product = item.product;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
            extra_data: item.extra_data,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginatedProductWithExtraDataResponse {
    pub results: Vec<ProductWithExtraDataResponse>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl From<Page<ProductWithExtraData>> for PaginatedProductWithExtraDataResponse {
    fn from(page: Page<ProductWithExtraData>) -> Self {
        let page = page.map(ProductWithExtraDataResponse::from);
        Self {
            results: page.results,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch_request(description: MaybeUndefined<String>) -> PatchProductRequest {
        PatchProductRequest {
            name: None,
            description,
            price: None,
        }
    }

    #[test]
    fn should_keep_description_when_undefined() {
        let patch: ProductPatch = patch_request(MaybeUndefined::Undefined).into();
        assert_eq!(patch.description, None);
        assert!(patch.is_empty());
    }

    #[test]
    fn should_clear_description_when_null() {
        let patch: ProductPatch = patch_request(MaybeUndefined::Null).into();
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn should_set_description_when_value() {
        let patch: ProductPatch = patch_request(MaybeUndefined::Value("Dark".to_string())).into();
        assert_eq!(patch.description, Some(Some("Dark".to_string())));
    }
}
