use async_trait::async_trait;

use crate::domain::barcode::errors::BarcodeError;
use crate::domain::barcode::model::BarcodeSymbol;
use crate::domain::shared::value_objects::ImagePayload;

pub struct DecodeBarcodeParams {
    pub image: ImagePayload,
}

#[async_trait]
pub trait DecodeBarcodeUseCase: Send + Sync {
    async fn execute(&self, params: DecodeBarcodeParams) -> Result<BarcodeSymbol, BarcodeError>;
}
