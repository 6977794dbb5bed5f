use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::value_objects::ImagePayloadError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_json(name: &str, message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: name.to_string(),
        message: message.to_string(),
    })
}

impl IntoErrorResponse for ImagePayloadError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match self {
            ImagePayloadError::Empty => "image.empty",
            ImagePayloadError::InvalidBase64 => "image.invalid_base64",
        };
        (
            StatusCode::BAD_REQUEST,
            error_json("ValidationError", message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_base64_to_bad_request() {
        let (status, json) = ImagePayloadError::InvalidBase64.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "image.invalid_base64");
    }
}
