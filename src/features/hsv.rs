//! Hue-saturation-value conversion on the 8-bit scale
//!
//! Hue is stored as degrees halved (`0..180`) so that it fits a byte;
//! saturation and value span `0..=255`.

use std::fmt;
use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::plan::constants::marker;
use crate::plan::errors::{PlanError, PlanResult};

/// Order in which the three channels of a decoded pixel are read
///
/// `Bgr` reads the first channel as blue. Decoded images are always RGB, so
/// `Bgr` swaps red and blue before the hue is computed; the default marker
/// bounds were tuned under that reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    Rgb,
    #[default]
    Bgr,
}

impl ChannelOrder {
    /// Look up a channel order by its configuration name
    pub fn from_name(name: &str) -> PlanResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "rgb" => Ok(ChannelOrder::Rgb),
            "bgr" => Ok(ChannelOrder::Bgr),
            other => Err(PlanError::InvalidConfig(format!("Unknown channel order: {}", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Bgr => "bgr",
        }
    }

    /// (red, green, blue) of a pixel under this reading
    fn split(&self, pixel: &Rgb<u8>) -> (u8, u8, u8) {
        let [a, b, c] = pixel.0;
        match self {
            ChannelOrder::Rgb => (a, b, c),
            ChannelOrder::Bgr => (c, b, a),
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert one red/green/blue triple to `[h, s, v]`
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let s = if v == 0.0 { 0.0 } else { (255.0 * diff / v).round() };

    let h = if diff == 0.0 {
        0.0
    } else {
        let degrees = if v == rf {
            60.0 * (gf - bf) / diff
        } else if v == gf {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        let halved = (degrees / 2.0).round();
        if halved >= f64::from(marker::HUE_MAX) { halved - f64::from(marker::HUE_MAX) } else { halved }
    };

    [h as u8, s as u8, v as u8]
}

/// Convert a pixel under the given channel order
pub fn pixel_to_hsv(pixel: &Rgb<u8>, order: ChannelOrder) -> [u8; 3] {
    let (r, g, b) = order.split(pixel);
    rgb_to_hsv(r, g, b)
}

/// Inclusive per-channel HSV range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        HsvRange { lower, upper }
    }

    /// True when every channel lies within `[lower, upper]`
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }

    /// Reject ranges that can never match or exceed the hue scale
    pub fn validate(&self) -> PlanResult<()> {
        const CHANNELS: [&str; 3] = ["hue", "saturation", "value"];
        for (i, channel) in CHANNELS.iter().enumerate() {
            if self.lower[i] > self.upper[i] {
                return Err(PlanError::InvalidConfig(format!(
                    "Lower {} bound {} exceeds upper bound {}", channel, self.lower[i], self.upper[i])));
            }
        }
        if self.lower[0] > marker::HUE_MAX || self.upper[0] > marker::HUE_MAX {
            return Err(PlanError::InvalidConfig(format!(
                "Hue bounds must lie within 0..={}", marker::HUE_MAX)));
        }
        Ok(())
    }
}

/// Threshold an image into a binary mask
///
/// Pixels whose HSV triple falls inside `range` become foreground (255),
/// every other pixel becomes background (0).
pub fn threshold(image: &RgbImage, range: &HsvRange, order: ChannelOrder) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let hsv = pixel_to_hsv(image.get_pixel(x, y), order);
        if range.contains(hsv) {
            Luma([marker::FOREGROUND])
        } else {
            Luma([marker::BACKGROUND])
        }
    })
}
