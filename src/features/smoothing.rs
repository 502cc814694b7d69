//! Noise suppression filters applied before and after thresholding

use std::fmt;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::{box_filter, median_filter};

use crate::plan::constants::marker;
use crate::plan::errors::{PlanError, PlanResult};

/// Smoothing filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurMethod {
    /// Mean over the aperture
    BoxAverage,
    /// Median over the aperture
    #[default]
    Median,
}

impl BlurMethod {
    /// Look up a method by its configuration name
    pub fn from_name(name: &str) -> PlanResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "box" | "average" | "box-average" | "blur" => Ok(BlurMethod::BoxAverage),
            "median" => Ok(BlurMethod::Median),
            other => Err(PlanError::InvalidConfig(format!("Unknown blur method: {}", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlurMethod::BoxAverage => "box",
            BlurMethod::Median => "median",
        }
    }

    /// Smooth a color image with a `kernel_size` square aperture
    pub fn smooth_rgb(&self, image: &RgbImage, kernel_size: u32) -> PlanResult<RgbImage> {
        let radius = kernel_radius(kernel_size)?;
        if radius == 0 {
            return Ok(image.clone());
        }

        Ok(match self {
            BlurMethod::Median => median_filter(image, radius, radius),
            BlurMethod::BoxAverage => {
                let channels: Vec<GrayImage> = (0..3)
                    .map(|c| box_filter(&channel(image, c), radius, radius))
                    .collect();
                RgbImage::from_fn(image.width(), image.height(), |x, y| {
                    Rgb([
                        channels[0].get_pixel(x, y)[0],
                        channels[1].get_pixel(x, y)[0],
                        channels[2].get_pixel(x, y)[0],
                    ])
                })
            }
        })
    }

    /// Smooth a binary mask, keeping it binary
    ///
    /// The median of binary values is already binary. A box average is
    /// re-binarized at half intensity so that isolated speckles vanish
    /// instead of turning into faint halos.
    pub fn smooth_mask(&self, mask: &GrayImage, kernel_size: u32) -> PlanResult<GrayImage> {
        let radius = kernel_radius(kernel_size)?;
        if radius == 0 {
            return Ok(mask.clone());
        }

        Ok(match self {
            BlurMethod::Median => median_filter(mask, radius, radius),
            BlurMethod::BoxAverage => {
                let mut averaged = box_filter(mask, radius, radius);
                for pixel in averaged.pixels_mut() {
                    pixel.0[0] = if pixel.0[0] >= 128 { marker::FOREGROUND } else { marker::BACKGROUND };
                }
                averaged
            }
        })
    }
}

impl fmt::Display for BlurMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Radius of a centered square aperture
///
/// Only odd, positive kernel sizes have a center pixel.
pub fn kernel_radius(kernel_size: u32) -> PlanResult<u32> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(PlanError::InvalidConfig(format!(
            "Kernel size must be a positive odd number, got {}", kernel_size)));
    }
    Ok((kernel_size - 1) / 2)
}

fn channel(image: &RgbImage, index: usize) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| Luma([image.get_pixel(x, y)[index]]))
}
