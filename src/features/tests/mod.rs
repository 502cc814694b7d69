mod components_tests;
mod mask_tests;

use image::{GrayImage, Luma};

/// Black mask with the given inclusive rectangles painted white
pub(crate) fn mask_with_rects(width: u32, height: u32, rects: &[(u32, u32, u32, u32)]) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    for &(x0, y0, x1, y1) in rects {
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }
    mask
}
