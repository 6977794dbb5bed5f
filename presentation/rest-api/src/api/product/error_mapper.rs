use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.code_empty",
            ),
            ProductError::CodeNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "product.code_not_found")
            }
            ProductError::RegistryUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NoDataAvailable",
                "product.registry_unavailable",
            ),
        };

        (status, error_json(name, message))
    }
}
