use std::panic::{AssertUnwindSafe, catch_unwind};

use image::GrayImage;

use business::domain::shared::value_objects::ImagePayload;

/// Decodes an encoded image into 8-bit grayscale.
///
/// Returns `None` for anything the decoder rejects, for zero-sized images,
/// and when the decoder panics on corrupt input.
pub fn load_luma(image: &ImagePayload) -> Option<GrayImage> {
    let decoded = catch_unwind(AssertUnwindSafe(|| {
        image::load_from_memory(image.as_bytes()).ok()
    }))
    .ok()
    .flatten()?;

    let luma = decoded.to_luma8();
    if luma.width() == 0 || luma.height() == 0 {
        return None;
    }
    Some(luma)
}
