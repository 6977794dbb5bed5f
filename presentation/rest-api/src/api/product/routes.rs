use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::barcode::errors::BarcodeError;
use business::domain::product::use_cases::lookup::{LookupProductParams, LookupProductUseCase};
use business::domain::session::model::InputMethod;
use business::domain::session::use_cases::resolve_code::{ResolveCodeParams, ResolveCodeUseCase};
use business::domain::shared::value_objects::ImagePayload;
use business::domain::verification::use_cases::verify::{VerifyRemoteParams, VerifyRemoteUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    LookupProductRequest, ProductRecordResponse, VerificationSourceDto, VerifyBarcodeRequest,
    VerifyBarcodeResponse,
};
use crate::api::session::open_session;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    lookup_use_case: Arc<dyn LookupProductUseCase>,
    resolve_code_use_case: Arc<dyn ResolveCodeUseCase>,
    verify_remote_use_case: Arc<dyn VerifyRemoteUseCase>,
}

impl ProductApi {
    pub fn new(
        lookup_use_case: Arc<dyn LookupProductUseCase>,
        resolve_code_use_case: Arc<dyn ResolveCodeUseCase>,
        verify_remote_use_case: Arc<dyn VerifyRemoteUseCase>,
    ) -> Self {
        Self {
            lookup_use_case,
            resolve_code_use_case,
            verify_remote_use_case,
        }
    }
}

/// Product registry API
///
/// Endpoints for looking up medicine products by barcode.
#[OpenApi]
impl ProductApi {
    /// Look up a product by barcode
    ///
    /// Returns the registry entry whose GTIN equals the trimmed code.
    #[oai(path = "/products/lookup", method = "post", tag = "ApiTags::Products")]
    async fn lookup_product(&self, body: Json<LookupProductRequest>) -> LookupProductResponse {
        let params = LookupProductParams {
            session: open_session(body.0.session_id, InputMethod::Manual),
            code: body.0.code,
        };

        match self.lookup_use_case.execute(params).await {
            Ok(record) => LookupProductResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LookupProductResponse::BadRequest(json),
                    404 => LookupProductResponse::NotFound(json),
                    _ => LookupProductResponse::NoDataAvailable(json),
                }
            }
        }
    }

    /// Verify a barcode
    ///
    /// Resolves the code from manual input or from a scanned image, then
    /// looks it up in the registry (default) or on the ledger.
    #[oai(
        path = "/products/verify-barcode",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn verify_barcode(&self, body: Json<VerifyBarcodeRequest>) -> VerifyBarcodeApiResponse {
        let request = body.0;
        let input_method: InputMethod = request.input_method.into();

        // The image is only read for scans; a manual request ignores it.
        let image = match (&input_method, request.image_base64.as_deref()) {
            (InputMethod::ScanImage, Some(raw)) => match ImagePayload::from_base64(raw) {
                Ok(image) => Some(image),
                Err(err) => return VerifyBarcodeApiResponse::from_error(err.into_error_response()),
            },
            _ => None,
        };

        let session = match self
            .resolve_code_use_case
            .execute(ResolveCodeParams {
                session: open_session(request.session_id, input_method),
                manual_code: request.code,
                image,
            })
            .await
        {
            Ok(session) => session,
            Err(err) => return VerifyBarcodeApiResponse::from_error(err.into_error_response()),
        };

        let Some(symbol) = session.last_decoded.clone() else {
            return VerifyBarcodeApiResponse::from_error(BarcodeError::CodeEmpty.into_error_response());
        };

        let mut response = VerifyBarcodeResponse {
            session_id: session.id.to_string(),
            input_method: session.input_method.clone().into(),
            barcode: symbol.clone().into(),
            source: request.source,
            product: None,
            verification: None,
        };

        match request.source {
            VerificationSourceDto::Registry => {
                let params = LookupProductParams {
                    session,
                    code: symbol.payload,
                };
                match self.lookup_use_case.execute(params).await {
                    Ok(record) => response.product = Some(record.into()),
                    Err(err) => {
                        return VerifyBarcodeApiResponse::from_error(err.into_error_response());
                    }
                }
            }
            VerificationSourceDto::Chain => {
                let params = VerifyRemoteParams {
                    session,
                    code: symbol.payload,
                };
                match self.verify_remote_use_case.execute(params).await {
                    Ok(verification) => response.verification = Some(verification.into()),
                    Err(err) => {
                        return VerifyBarcodeApiResponse::from_error(err.into_error_response());
                    }
                }
            }
        }

        VerifyBarcodeApiResponse::Ok(Json(response))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductRecordResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    NoDataAvailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum VerifyBarcodeApiResponse {
    #[oai(status = 200)]
    Ok(Json<VerifyBarcodeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    NoSymbol(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    NoDataAvailable(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl VerifyBarcodeApiResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            422 => Self::NoSymbol(json),
            502 => Self::BadGateway(json),
            503 => Self::NoDataAvailable(json),
            504 => Self::GatewayTimeout(json),
            _ => Self::InternalError(json),
        }
    }
}
