//! Shared vocabulary of the floor plan pipeline
//!
//! Errors, constants, configuration and the pixel-space feature types used
//! across the canvas, tiling, feature and export modules.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
#[cfg(test)]
mod tests;

pub use config::PipelineConfig;
pub use errors::{PlanError, PlanResult};
pub use types::{Centroid, PixelPoint, Polygon};
