use std::panic::{AssertUnwindSafe, catch_unwind};

use image::GrayImage;

/// Detects QR grids in the image and returns the content of the first grid
/// that decodes. A detector panic counts as "nothing found".
pub fn scan(image: &GrayImage) -> Option<String> {
    let (width, height) = image.dimensions();

    catch_unwind(AssertUnwindSafe(|| {
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
                image.get_pixel(x as u32, y as u32).0[0]
            });
        prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| grid.decode().ok().map(|(_meta, content)| content))
    }))
    .ok()
    .flatten()
}
