//! Marker color segmentation
//!
//! Turns a color canvas into a binary mask of the reserved marker color:
//! optional upscale, smoothing, HSV conversion, inclusive range threshold,
//! and an optional second smoothing pass over the mask itself.

use image::{GrayImage, RgbImage};
use log::{debug, info};

use crate::canvas::{resize_exact, ResampleFilter};
use crate::features::hsv::{self, ChannelOrder, HsvRange};
use crate::features::smoothing::{kernel_radius, BlurMethod};
use crate::plan::constants::marker;
use crate::plan::errors::{PlanError, PlanResult};

/// Parameters of the marker segmentation
#[derive(Debug, Clone, PartialEq)]
pub struct MaskSettings {
    /// Smoothing aperture, odd
    pub kernel_size: u32,
    /// Smoothing filter
    pub blur_method: BlurMethod,
    /// Smooth the binary mask a second time
    pub double_smooth: bool,
    /// Channel reading used for the hue conversion
    pub channel_order: ChannelOrder,
    /// Inclusive HSV range of the marker color
    pub range: HsvRange,
    /// Integer upscale applied to the canvas before masking
    pub smooth_zoom_factor: u32,
    /// Filter used for the upscale
    pub zoom_filter: ResampleFilter,
}

impl Default for MaskSettings {
    fn default() -> Self {
        MaskSettings {
            kernel_size: marker::KERNEL_SIZE,
            blur_method: BlurMethod::default(),
            double_smooth: true,
            channel_order: ChannelOrder::default(),
            range: HsvRange::new(marker::HSV_LOWER, marker::HSV_UPPER),
            smooth_zoom_factor: 1,
            zoom_filter: ResampleFilter::default(),
        }
    }
}

impl MaskSettings {
    /// Fail fast on settings the filters cannot honor
    pub fn validate(&self) -> PlanResult<()> {
        kernel_radius(self.kernel_size)?;
        if self.smooth_zoom_factor == 0 {
            return Err(PlanError::InvalidConfig("Smooth zoom factor must be at least 1".to_string()));
        }
        self.range.validate()
    }
}

/// Binary marker mask together with the canvas size it was measured on
///
/// Pixel coordinates read from the mask are only meaningful relative to
/// `reference_size`; after a smooth zoom this is the upscaled size, and it is
/// the size every geographic conversion must use.
#[derive(Debug, Clone)]
pub struct ColorMask {
    /// 255 where the marker color was found, 0 elsewhere
    pub mask: GrayImage,
    /// Upscale factor that was applied before masking
    pub smooth_zoom_factor: u32,
}

impl ColorMask {
    /// Wrap an existing binary image measured at its own size
    pub fn from_binary(mask: GrayImage) -> Self {
        ColorMask { mask, smooth_zoom_factor: 1 }
    }

    /// (width, height) of the canvas the mask was computed on
    pub fn reference_size(&self) -> (u32, u32) {
        self.mask.dimensions()
    }

    /// Number of foreground pixels
    pub fn foreground_count(&self) -> usize {
        self.mask.pixels().filter(|p| p.0[0] != marker::BACKGROUND).count()
    }
}

/// Extracts the marker mask from a color canvas
#[derive(Debug, Clone)]
pub struct ColorMaskExtractor {
    settings: MaskSettings,
}

impl ColorMaskExtractor {
    /// Create an extractor, validating its settings
    pub fn new(settings: MaskSettings) -> PlanResult<Self> {
        settings.validate()?;
        Ok(ColorMaskExtractor { settings })
    }

    pub fn settings(&self) -> &MaskSettings {
        &self.settings
    }

    /// Upscale the canvas by the smooth zoom factor
    fn zoom(&self, canvas: &RgbImage) -> PlanResult<RgbImage> {
        let factor = self.settings.smooth_zoom_factor;
        if factor == 1 {
            return Ok(canvas.clone());
        }

        let scaled = |side: u32| side.checked_mul(factor).ok_or_else(|| {
            PlanError::InvalidConfig(format!("Smooth zoom factor {} overflows the canvas size", factor))
        });
        let (width, height) = (scaled(canvas.width())?, scaled(canvas.height())?);

        debug!("Upscaling {}x{} canvas to {}x{} before masking",
               canvas.width(), canvas.height(), width, height);
        Ok(resize_exact(canvas, width, height, self.settings.zoom_filter))
    }

    /// Compute the marker mask of `canvas`
    ///
    /// # Arguments
    /// * `canvas` - Normalized color canvas
    ///
    /// # Returns
    /// The binary mask, sized to the (possibly upscaled) canvas
    pub fn extract(&self, canvas: &RgbImage) -> PlanResult<ColorMask> {
        let settings = &self.settings;
        info!("Extracting marker mask: {} blur, kernel {}, range {:?}..{:?} ({})",
              settings.blur_method, settings.kernel_size,
              settings.range.lower, settings.range.upper, settings.channel_order);

        let zoomed = self.zoom(canvas)?;
        let smoothed = settings.blur_method.smooth_rgb(&zoomed, settings.kernel_size)?;
        let mut mask = hsv::threshold(&smoothed, &settings.range, settings.channel_order);

        if settings.double_smooth {
            mask = settings.blur_method.smooth_mask(&mask, settings.kernel_size)?;
        }

        let color_mask = ColorMask {
            mask,
            smooth_zoom_factor: settings.smooth_zoom_factor,
        };
        debug!("Mask has {} foreground pixels", color_mask.foreground_count());

        Ok(color_mask)
    }
}
