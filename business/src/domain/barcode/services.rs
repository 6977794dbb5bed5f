use crate::domain::shared::value_objects::ImagePayload;

use super::model::BarcodeSymbol;

/// Service port for decoding barcode symbols out of images.
///
/// Implementations never fail: unreadable images and images without a
/// symbol both yield `None`. When several symbols are present, which one is
/// returned is up to the implementation.
pub trait BarcodeReader: Send + Sync {
    fn decode(&self, image: &ImagePayload) -> Option<BarcodeSymbol>;
}
