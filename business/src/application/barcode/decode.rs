use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::barcode::errors::BarcodeError;
use crate::domain::barcode::model::BarcodeSymbol;
use crate::domain::barcode::services::BarcodeReader;
use crate::domain::barcode::use_cases::decode::{DecodeBarcodeParams, DecodeBarcodeUseCase};
use crate::domain::logger::Logger;

pub struct DecodeBarcodeUseCaseImpl {
    pub reader: Arc<dyn BarcodeReader>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecodeBarcodeUseCase for DecodeBarcodeUseCaseImpl {
    async fn execute(&self, params: DecodeBarcodeParams) -> Result<BarcodeSymbol, BarcodeError> {
        self.logger.info(&format!(
            "Decoding barcode from image {} ({} bytes)",
            params.image.fingerprint(),
            params.image.len()
        ));

        match self.reader.decode(&params.image) {
            Some(symbol) => {
                self.logger.info(&format!(
                    "Barcode decoded: {} ({})",
                    symbol.payload,
                    symbol
                        .symbology
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                ));
                Ok(symbol)
            }
            None => {
                self.logger.warn(&format!(
                    "No barcode detected in image {}",
                    params.image.fingerprint()
                ));
                Err(BarcodeError::NoSymbolDetected)
            }
        }
    }
}
