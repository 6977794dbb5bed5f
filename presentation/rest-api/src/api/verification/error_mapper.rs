use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::verification::errors::VerificationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_json};

impl IntoErrorResponse for VerificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            VerificationError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "verification.code_empty",
            ),
            VerificationError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "LedgerTimeout",
                "verification.timeout",
            ),
            VerificationError::Network(_) => (
                StatusCode::BAD_GATEWAY,
                "LedgerUnavailable",
                "verification.network_error",
            ),
            VerificationError::Status { .. } => (
                StatusCode::BAD_GATEWAY,
                "LedgerError",
                "verification.unexpected_status",
            ),
            VerificationError::InvalidResponse(_) => (
                StatusCode::BAD_GATEWAY,
                "LedgerError",
                "verification.invalid_response",
            ),
        };

        (status, error_json(name, message))
    }
}
