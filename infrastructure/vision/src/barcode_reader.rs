use business::domain::barcode::model::{BarcodeSymbol, Symbology};
use business::domain::barcode::services::BarcodeReader;
use business::domain::shared::value_objects::ImagePayload;
use image::GrayImage;

use crate::{ean13, image_loader, qr};

/// Barcode reader over uploaded images. Tries QR detection first, then
/// EAN-13 scanlines; the first symbol found wins.
pub struct ImageBarcodeReader;

impl ImageBarcodeReader {
    pub fn new() -> Self {
        Self
    }

    pub fn decode_luma(&self, luma: &GrayImage) -> Option<BarcodeSymbol> {
        if let Some(content) = qr::scan(luma) {
            return Some(BarcodeSymbol::new(content, Some(Symbology::QrCode)));
        }
        ean13::scan(luma).map(|digits| BarcodeSymbol::new(digits, Some(Symbology::Ean13)))
    }
}

impl Default for ImageBarcodeReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BarcodeReader for ImageBarcodeReader {
    fn decode(&self, image: &ImagePayload) -> Option<BarcodeSymbol> {
        let luma = image_loader::load_luma(image)?;
        self.decode_luma(&luma)
    }
}
