#[derive(Debug, thiserror::Error)]
pub enum BarcodeError {
    #[error("barcode.no_symbol_detected")]
    NoSymbolDetected,
    #[error("barcode.code_empty")]
    CodeEmpty,
    #[error("barcode.image_missing")]
    ImageMissing,
}
