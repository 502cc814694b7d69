//! Marker feature extraction
//!
//! Segments the reserved marker color out of a canvas and recovers point
//! features (component centroids) and polygon features (boundary rings).

pub mod components;
pub mod contours;
pub mod hsv;
pub mod mask;
pub mod smoothing;
#[cfg(test)]
mod tests;

pub use components::locate_centroids;
pub use contours::{ContourMode, ContourPolygonExtractor};
pub use hsv::{ChannelOrder, HsvRange};
pub use mask::{ColorMask, ColorMaskExtractor, MaskSettings};
pub use smoothing::BlurMethod;
