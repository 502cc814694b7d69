//! Pixel to geographic coordinate transformation
//!
//! A single affine mapping serves both point and polygon features:
//!
//! ```text
//! longitude = round(x * TOTAL_X / width  + ORIGIN_X)
//! latitude  = round(y * TOTAL_Y / height + ORIGIN_Y)
//! ```
//!
//! `width` and `height` must be those of the canvas the pixel was measured
//! on; use [`GeoCoordinateMapper::for_mask`] to take them from the mask.

use super::frame::GeoFrame;
use super::point::{GeoPoint, GeoPolygon};
use crate::features::ColorMask;
use crate::plan::errors::{PlanError, PlanResult};
use crate::plan::types::{PixelPoint, Polygon};

/// Maps pixel coordinates of one canvas into the geographic frame
#[derive(Debug, Clone, Copy)]
pub struct GeoCoordinateMapper {
    frame: GeoFrame,
    width: u32,
    height: u32,
}

impl GeoCoordinateMapper {
    /// Create a mapper for a canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> PlanResult<Self> {
        Self::with_frame(GeoFrame::default(), width, height)
    }

    /// Create a mapper onto a custom frame
    pub fn with_frame(frame: GeoFrame, width: u32, height: u32) -> PlanResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlanError::GenericError(format!(
                "Cannot geo-reference a {}x{} canvas", width, height)));
        }
        Ok(GeoCoordinateMapper { frame, width, height })
    }

    /// Create a mapper for the canvas a mask was computed on
    pub fn for_mask(mask: &ColorMask) -> PlanResult<Self> {
        let (width, height) = mask.reference_size();
        Self::new(width, height)
    }

    /// Canvas size this mapper was built for
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Map one pixel coordinate
    ///
    /// Exact halves round to the nearest even integer.
    pub fn map_xy(&self, x: u32, y: u32) -> GeoPoint {
        let (total_x, total_y) = self.frame.total;
        let (origin_x, origin_y) = self.frame.origin;

        let longitude = f64::from(x) * total_x / f64::from(self.width) + origin_x;
        let latitude = f64::from(y) * total_y / f64::from(self.height) + origin_y;

        GeoPoint::new(latitude.round_ties_even() as i64, longitude.round_ties_even() as i64)
    }

    /// Map a centroid or vertex
    pub fn map_point(&self, point: PixelPoint) -> GeoPoint {
        self.map_xy(point.x, point.y)
    }

    /// Map every vertex of a ring, keeping order and closure
    pub fn map_polygon(&self, polygon: &Polygon) -> GeoPolygon {
        GeoPolygon {
            vertices: polygon.vertices().iter().map(|p| self.map_point(*p)).collect(),
        }
    }
}

/// One-off conversion of pixel `(x, y)` on a `width` x `height` canvas
pub fn pixel_to_geo(x: u32, y: u32, width: u32, height: u32) -> PlanResult<GeoPoint> {
    Ok(GeoCoordinateMapper::new(width, height)?.map_xy(x, y))
}
