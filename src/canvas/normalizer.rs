//! Square canvas normalization
//!
//! Before tiling, the source raster is centered on a square background
//! canvas whose edge is the smallest power-of-two multiple of the tile size
//! strictly larger than both source dimensions.

use image::{imageops, Rgb, RgbImage};
use log::{debug, info};

use crate::plan::errors::{PlanError, PlanResult};

/// Source image centered on a square, tile-aligned canvas
#[derive(Debug, Clone)]
pub struct NormalizedCanvas {
    /// The square canvas
    pub image: RgbImage,
    /// Tile edge the canvas was sized for
    pub tile_size: u32,
    /// Width of the source image
    pub source_width: u32,
    /// Height of the source image
    pub source_height: u32,
    /// Position of the source's top-left pixel on the canvas
    pub offset: (u32, u32),
}

impl NormalizedCanvas {
    /// Edge length of the square canvas
    pub fn edge(&self) -> u32 {
        self.image.width()
    }

    /// Power of two relating the canvas edge to the tile size
    pub fn scale_exponent(&self) -> u32 {
        (self.edge() / self.tile_size).trailing_zeros()
    }
}

/// Compute the canvas edge for a source of the given size
///
/// Starts at `tile_size` and doubles while the edge is not strictly larger
/// than both dimensions.
///
/// # Arguments
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `tile_size` - Tile edge in pixels
///
/// # Returns
/// The canvas edge, or an error for a zero tile size or an edge that
/// overflows `u32`
pub fn normalized_edge(width: u32, height: u32, tile_size: u32) -> PlanResult<u32> {
    if tile_size == 0 {
        return Err(PlanError::InvalidConfig("Tile size must be positive".to_string()));
    }

    let mut best_fit = tile_size;
    while best_fit <= width || best_fit <= height {
        best_fit = best_fit.checked_mul(2).ok_or_else(|| {
            PlanError::GenericError(format!(
                "Canvas for a {}x{} image exceeds the addressable size", width, height))
        })?;
    }

    Ok(best_fit)
}

/// Center `source` on a square background canvas
///
/// The offset is floor-divided on each axis, so when the padding is odd the
/// left/top margin is one pixel narrower than the right/bottom one.
///
/// # Arguments
/// * `source` - The raster to normalize; left untouched
/// * `background` - Fill color of the padding
/// * `tile_size` - Tile edge the canvas must be a multiple of
///
/// # Returns
/// A new NormalizedCanvas
pub fn normalize(source: &RgbImage, background: Rgb<u8>, tile_size: u32) -> PlanResult<NormalizedCanvas> {
    let (width, height) = source.dimensions();
    let edge = normalized_edge(width, height, tile_size)?;
    let offset = ((edge - width) / 2, (edge - height) / 2);

    debug!("Normalizing {}x{} source onto {}x{} canvas at offset {:?}",
           width, height, edge, edge, offset);

    let mut image = RgbImage::from_pixel(edge, edge, background);
    imageops::replace(&mut image, source, i64::from(offset.0), i64::from(offset.1));

    info!("Normalized canvas: {}x{} (tile size {})", edge, edge, tile_size);

    Ok(NormalizedCanvas {
        image,
        tile_size,
        source_width: width,
        source_height: height,
        offset,
    })
}
