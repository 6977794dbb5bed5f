use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::authenticity::errors::AuthenticityError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json};

impl IntoErrorResponse for AuthenticityError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthenticityError::UnreadableImage => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UnreadableImage",
                "authenticity.unreadable_image",
            ),
            AuthenticityError::ConfidenceOutOfRange => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "authenticity.confidence_out_of_range",
            ),
        };

        (status, error_json(name, message))
    }
}
