//! Image decode and encode

use std::path::Path;
use image::{imageops, GrayImage, ImageFormat, RgbImage};
use log::{debug, info};

use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::fs_utils::{ensure_dir, write_atomically};

/// Load an image as 8-bit RGB
///
/// Any format the `image` crate can decode is accepted. Alpha and extra
/// bands are dropped, wider samples are reduced to 8 bits.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded raster, or `MissingInput` when the file does not exist
pub fn load_raster<P: AsRef<Path>>(path: P) -> PlanResult<RgbImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PlanError::MissingInput(path.display().to_string()));
    }

    let decoded = image::open(path).map_err(|e| {
        PlanError::MissingInput(format!("{} ({})", path.display(), e))
    })?;
    debug!("Decoded {} as {:?}", path.display(), decoded.color());

    let raster = decoded.to_rgb8();
    if raster.width() == 0 || raster.height() == 0 {
        return Err(PlanError::MissingInput(format!("{} (empty image)", path.display())));
    }

    info!("Loaded {} ({}x{})", path.display(), raster.width(), raster.height());
    Ok(raster)
}

/// Write a binary mask as a grayscale PNG
pub fn save_mask<P: AsRef<Path>>(mask: &GrayImage, path: P) -> PlanResult<()> {
    let path = path.as_ref();
    write_atomically(path, |writer| {
        mask.write_to(writer, ImageFormat::Png)?;
        Ok(())
    })?;

    info!("Saved mask to {}", path.display());
    Ok(())
}

/// Gray copy of a color raster
///
/// Uses the luma weights of the `image` crate; neutral pixels keep their
/// intensity.
pub fn to_grayscale(raster: &RgbImage) -> GrayImage {
    imageops::grayscale(raster)
}

/// Write a gray copy of an image file as PNG
///
/// The gray plan is the backdrop markers get painted on before a marked
/// image is fed back to the feature extractor.
///
/// # Arguments
/// * `input` - Source image, any decodable format
/// * `output` - PNG to write; its directory is created when missing
///
/// # Returns
/// The (width, height) of the written image
pub fn save_grayscale<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> PlanResult<(u32, u32)> {
    let output = output.as_ref();
    let gray = to_grayscale(&load_raster(input)?);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_atomically(output, |writer| {
        gray.write_to(writer, ImageFormat::Png)?;
        Ok(())
    })?;

    info!("Saved grayscale copy to {}", output.display());
    Ok(gray.dimensions())
}
