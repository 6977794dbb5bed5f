use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::session::model::InputMethod;
use business::domain::verification::use_cases::verify::{VerifyRemoteParams, VerifyRemoteUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::open_session;
use crate::api::tags::ApiTags;
use crate::api::verification::dto::{ChainVerificationResponse, VerifyRemoteRequest};

pub struct VerificationApi {
    verify_remote_use_case: Arc<dyn VerifyRemoteUseCase>,
}

impl VerificationApi {
    pub fn new(verify_remote_use_case: Arc<dyn VerifyRemoteUseCase>) -> Self {
        Self {
            verify_remote_use_case,
        }
    }
}

/// Ledger verification API
#[OpenApi]
impl VerificationApi {
    /// Verify a code against the ledger
    ///
    /// Without a configured ledger endpoint the answer has status
    /// `not_implemented` and nothing is checked.
    #[oai(
        path = "/products/verify-remote",
        method = "post",
        tag = "ApiTags::Verification"
    )]
    async fn verify_remote(&self, body: Json<VerifyRemoteRequest>) -> VerifyRemoteResponse {
        let params = VerifyRemoteParams {
            session: open_session(body.0.session_id, InputMethod::Manual),
            code: body.0.code,
        };

        match self.verify_remote_use_case.execute(params).await {
            Ok(verification) => VerifyRemoteResponse::Ok(Json(verification.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => VerifyRemoteResponse::BadRequest(json),
                    504 => VerifyRemoteResponse::GatewayTimeout(json),
                    _ => VerifyRemoteResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum VerifyRemoteResponse {
    #[oai(status = 200)]
    Ok(Json<ChainVerificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}
