//! Floor plan processing constants
//!
//! This module collects the fixed numbers used by the tiler and the feature
//! extractor so that the rest of the code can refer to them by name.

/// Tiling constants
pub mod tiling {
    /// Default tile edge in pixels
    pub const TILE_SIZE: u32 = 256;

    /// Default top zoom level (inclusive)
    pub const ZOOM_LIMIT: u32 = 4;

    /// Default canvas background (white)
    pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

    /// Largest zoom level accepted by configuration validation
    pub const MAX_ZOOM_LIMIT: u32 = 20;
}

/// Geographic frame of the map viewer
///
/// A linear approximation of the global Web Mercator extents, in meters.
pub mod geo {
    /// Total span of the frame along (x, y); y grows downwards in pixel space
    pub const TOTAL: (f64, f64) = (40075016.0, -40075016.0);

    /// Geographic position of pixel (0, 0)
    pub const ORIGIN: (f64, f64) = (-20037508.0, 20037508.0);
}

/// Marker color segmentation defaults
pub mod marker {
    /// Default smoothing aperture
    pub const KERNEL_SIZE: u32 = 5;

    /// Lower inclusive HSV bound of the reserved marker color
    pub const HSV_LOWER: [u8; 3] = [120, 210, 230];

    /// Upper inclusive HSV bound of the reserved marker color
    pub const HSV_UPPER: [u8; 3] = [180, 255, 255];

    /// Upper end of the 8-bit hue scale (degrees halved)
    pub const HUE_MAX: u8 = 180;

    /// Value written for foreground pixels in a mask
    pub const FOREGROUND: u8 = 255;

    /// Value written for background pixels in a mask
    pub const BACKGROUND: u8 = 0;

    /// Default Douglas-Peucker tolerance in pixels
    pub const SIMPLIFY_EPSILON: f64 = 1.0;
}

/// Output file names
pub mod files {
    /// Point features table
    pub const POINTS_CSV: &str = "output.csv";

    /// Polygon features document
    pub const POLYGONS_KML: &str = "output.kml";

    /// Optional mask dump
    pub const MASK_DEBUG: &str = "generated_mask.png";

    /// Gray copy of the floor plan
    pub const GRAYSCALE: &str = "greyscale.png";

    /// Terminal summary, written only when a run succeeds
    pub const SUMMARY: &str = "summary.toml";

    /// Suffix of documents that are still being written
    pub const PARTIAL_SUFFIX: &str = ".partial";

    /// Default output directory
    pub const OUTPUT_FOLDER: &str = "./Output";

    /// Default log file
    pub const LOG_FILE: &str = "plantiles.log";
}
