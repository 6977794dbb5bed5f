use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::barcode::errors::BarcodeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json};

impl IntoErrorResponse for BarcodeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BarcodeError::NoSymbolDetected => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NoSymbolDetected",
                "barcode.no_symbol_detected",
            ),
            BarcodeError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "barcode.code_empty",
            ),
            BarcodeError::ImageMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "barcode.image_missing",
            ),
        };

        (status, error_json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_symbol_to_unprocessable_entity() {
        let (status, json) = BarcodeError::NoSymbolDetected.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "barcode.no_symbol_detected");
    }

    #[test]
    fn should_map_input_errors_to_bad_request() {
        assert_eq!(
            BarcodeError::CodeEmpty.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BarcodeError::ImageMissing.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
    }
}
