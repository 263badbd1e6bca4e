use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned for 4xx/5xx responses that carry one.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
