use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::barcode::use_cases::decode::{DecodeBarcodeParams, DecodeBarcodeUseCase};
use business::domain::shared::value_objects::ImagePayload;

use crate::api::barcode::dto::{BarcodeSymbolResponse, DecodeBarcodeRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BarcodeApi {
    decode_use_case: Arc<dyn DecodeBarcodeUseCase>,
}

impl BarcodeApi {
    pub fn new(decode_use_case: Arc<dyn DecodeBarcodeUseCase>) -> Self {
        Self { decode_use_case }
    }
}

/// Barcode API
///
/// Reads EAN-13 and QR symbols from uploaded images.
#[OpenApi]
impl BarcodeApi {
    /// Decode a barcode image
    ///
    /// Returns the first symbol found in the image. QR codes are tried before
    /// EAN-13; do not rely on the order when an image holds several symbols.
    #[oai(path = "/barcodes/decode", method = "post", tag = "ApiTags::Barcodes")]
    async fn decode_barcode(&self, body: Json<DecodeBarcodeRequest>) -> DecodeBarcodeResponse {
        let image = match ImagePayload::from_base64(&body.0.image_base64) {
            Ok(image) => image,
            Err(err) => return DecodeBarcodeResponse::BadRequest(err.into_error_response().1),
        };

        match self
            .decode_use_case
            .execute(DecodeBarcodeParams { image })
            .await
        {
            Ok(symbol) => DecodeBarcodeResponse::Ok(Json(symbol.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DecodeBarcodeResponse::BadRequest(json),
                    _ => DecodeBarcodeResponse::NoSymbol(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DecodeBarcodeResponse {
    #[oai(status = 200)]
    Ok(Json<BarcodeSymbolResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    NoSymbol(Json<ErrorResponse>),
}
