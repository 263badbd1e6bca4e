use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::list_enriched::{
    ListEnrichedProductsParams, ListEnrichedProductsUseCase,
};
use business::domain::product::use_cases::patch::{PatchProductParams, PatchProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, PaginatedProductResponse, PaginatedProductWithExtraDataResponse,
    PatchProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    list_enriched_use_case: Arc<dyn ListEnrichedProductsUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    patch_use_case: Arc<dyn PatchProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        list_enriched_use_case: Arc<dyn ListEnrichedProductsUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        patch_use_case: Arc<dyn PatchProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            list_enriched_use_case,
            create_use_case,
            get_by_id_use_case,
            update_use_case,
            patch_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for listing, creating, reading, updating, and deleting products.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns a window of products ordered by id, plus the total number of
    /// products. The total is read separately from the window and may be
    /// momentarily out of step with it under concurrent writes.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        /// Number of products to skip (default: 0)
        offset: Query<Option<u64>>,
        /// Maximum number of products to return (default: 10)
        limit: Query<Option<u64>>,
    ) -> ListProductsResponse {
        let params = ListProductsParams {
            page: PageRequest::new(offset.0, limit.0),
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// List products with extra data
    ///
    /// Same window as `GET /products`, with each product paired with the
    /// product information service's answer for its name. Lookups run
    /// concurrently; a failed or slow lookup yields `extra_data: null`.
    #[oai(path = "/products/enriched", method = "get", tag = "ApiTags::Products")]
    async fn list_enriched_products(
        &self,
        /// Number of products to skip (default: 0)
        offset: Query<Option<u64>>,
        /// Maximum number of products to return (default: 10)
        limit: Query<Option<u64>>,
    ) -> ListEnrichedProductsResponse {
        let params = ListEnrichedProductsParams {
            page: PageRequest::new(offset.0, limit.0),
        };

        match self.list_enriched_use_case.execute(params).await {
            Ok(page) => ListEnrichedProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListEnrichedProductsResponse::InternalError(json)
            }
        }
    }

    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    422 => CreateProductResponse::UnprocessableEntity(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound,
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Overwrites every updatable field.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: id.0,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound,
                    422 => UpdateProductResponse::UnprocessableEntity(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Partially update a product
    ///
    /// Only the fields present in the body are written. An empty body leaves
    /// the product as it is.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn patch_product(
        &self,
        id: Path<i64>,
        body: Json<PatchProductRequest>,
    ) -> UpdateProductResponse {
        let params = PatchProductParams {
            id: id.0,
            patch: body.0.into(),
        };

        match self.patch_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound,
                    422 => UpdateProductResponse::UnprocessableEntity(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound,
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedProductResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListEnrichedProductsResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedProductWithExtraDataResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by PUT and PATCH.
#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
