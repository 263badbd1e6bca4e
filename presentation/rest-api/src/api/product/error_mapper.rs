use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::EnrichmentFailed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "product.enrichment_failed",
            ),
            ProductError::Repository(RepositoryError::ConstraintViolation) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ConstraintViolation",
                "repository.constraint_violation",
            ),
            ProductError::Repository(RepositoryError::Unavailable) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.unavailable",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
