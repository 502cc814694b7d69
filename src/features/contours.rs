//! Boundary rings of marker regions

use std::fmt;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;
use log::{debug, info};

use crate::features::mask::ColorMask;
use crate::plan::constants::marker;
use crate::plan::errors::{PlanError, PlanResult};
use crate::plan::types::{PixelPoint, Polygon};

/// How boundaries are traced and how many vertices are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContourMode {
    /// Outermost boundaries only, every boundary pixel kept
    #[default]
    Raw,
    /// Outer boundaries at every nesting level, reduced with Douglas-Peucker
    Simplified,
}

impl ContourMode {
    pub fn from_name(name: &str) -> PlanResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "raw" | "none" => Ok(ContourMode::Raw),
            "simplified" | "simple" => Ok(ContourMode::Simplified),
            other => Err(PlanError::InvalidConfig(format!("Unknown contour mode: {}", other))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContourMode::Raw => "raw",
            ContourMode::Simplified => "simplified",
        }
    }
}

impl fmt::Display for ContourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Traces one closed polygon per outer boundary of a mask
#[derive(Debug, Clone, Copy)]
pub struct ContourPolygonExtractor {
    mode: ContourMode,
    /// Douglas-Peucker tolerance in pixels, used in simplified mode
    epsilon: f64,
}

impl ContourPolygonExtractor {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `mode` - Boundary selection and vertex policy
    /// * `epsilon` - Simplification tolerance, must be positive
    pub fn new(mode: ContourMode, epsilon: f64) -> PlanResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(PlanError::InvalidConfig(format!(
                "Simplification tolerance must be a positive number, got {}", epsilon)));
        }
        Ok(ContourPolygonExtractor { mode, epsilon })
    }

    fn keeps(&self, contour: &Contour<u32>) -> bool {
        if contour.border_type != BorderType::Outer || contour.points.is_empty() {
            return false;
        }
        match self.mode {
            ContourMode::Raw => contour.parent.is_none(),
            ContourMode::Simplified => true,
        }
    }

    fn vertices(&self, points: Vec<Point<u32>>) -> Vec<Point<u32>> {
        match self.mode {
            ContourMode::Simplified if points.len() >= 3 => {
                approximate_polygon_dp(&points, self.epsilon, true)
            }
            _ => points,
        }
    }

    /// Trace the polygons of `mask`
    ///
    /// Every returned ring is closed by appending its first vertex, whatever
    /// the trace itself returned. Output follows trace order.
    pub fn extract(&self, mask: &ColorMask) -> Vec<Polygon> {
        let contours = find_contours::<u32>(&binarized(mask));
        debug!("Traced {} borders", contours.len());

        let polygons: Vec<Polygon> = contours
            .into_iter()
            .filter(|contour| self.keeps(contour))
            .filter_map(|contour| {
                let ring = self.vertices(contour.points)
                    .into_iter()
                    .map(|p| PixelPoint::new(p.x, p.y))
                    .collect();
                Polygon::closed(ring)
            })
            .collect();

        info!("Extracted {} polygons ({} mode)", polygons.len(), self.mode);
        polygons
    }
}

/// Mask with every non-background value forced to foreground
fn binarized(mask: &ColorMask) -> image::GrayImage {
    let mut binary = mask.mask.clone();
    for pixel in binary.pixels_mut() {
        if pixel.0[0] != marker::BACKGROUND {
            pixel.0[0] = marker::FOREGROUND;
        }
    }
    binary
}
