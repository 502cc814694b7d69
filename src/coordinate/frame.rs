//! Geographic frame definition

use crate::plan::constants::geo;

/// Linear extent of the geographic frame
///
/// Pixel (0, 0) maps onto `origin`; the far canvas corner maps onto
/// `origin + total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFrame {
    /// Span along (x, y)
    pub total: (f64, f64),
    /// Position of the top-left canvas corner
    pub origin: (f64, f64),
}

impl GeoFrame {
    /// Create a frame with an explicit extent
    pub fn new(total: (f64, f64), origin: (f64, f64)) -> Self {
        GeoFrame { total, origin }
    }

    /// Frame of the map viewer (global Web Mercator extents)
    pub fn web_mercator() -> Self {
        GeoFrame::new(geo::TOTAL, geo::ORIGIN)
    }
}

impl Default for GeoFrame {
    fn default() -> Self {
        GeoFrame::web_mercator()
    }
}
