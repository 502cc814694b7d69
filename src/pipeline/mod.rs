//! End-to-end runs over image files
//!
//! Ties the canvas, tiling, feature and export modules together into the
//! runs exposed by the command line and the library facade.

pub mod processor;
pub mod request;
#[cfg(test)]
mod tests;

pub use processor::{ExtractedFeatures, PlanProcessor};
pub use request::RunRequest;
