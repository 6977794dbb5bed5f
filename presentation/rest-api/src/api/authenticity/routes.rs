use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::authenticity::use_cases::classify::{
    ClassifyImageParams, ClassifyImageUseCase,
};
use business::domain::shared::value_objects::ImagePayload;

use crate::api::authenticity::dto::{AuthenticityVerdictResponse, ClassifyImageRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthenticityApi {
    classify_use_case: Arc<dyn ClassifyImageUseCase>,
}

impl AuthenticityApi {
    pub fn new(classify_use_case: Arc<dyn ClassifyImageUseCase>) -> Self {
        Self { classify_use_case }
    }
}

/// Authenticity API
#[OpenApi]
impl AuthenticityApi {
    /// Classify a product photo
    ///
    /// The current classifier is a placeholder: verdicts carry
    /// `authoritative = false` and a notice.
    #[oai(
        path = "/authenticity/classify",
        method = "post",
        tag = "ApiTags::Authenticity"
    )]
    async fn classify_image(&self, body: Json<ClassifyImageRequest>) -> ClassifyImageResponse {
        let image = match ImagePayload::from_base64(&body.0.image_base64) {
            Ok(image) => image,
            Err(err) => return ClassifyImageResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .classify_use_case
            .execute(ClassifyImageParams { image })
            .await
        {
            Ok(verdict) => ClassifyImageResponse::Ok(Json(verdict.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ClassifyImageResponse::BadRequest(json),
                    422 => ClassifyImageResponse::UnreadableImage(json),
                    _ => ClassifyImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClassifyImageResponse {
    #[oai(status = 200)]
    Ok(Json<AuthenticityVerdictResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnreadableImage(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
