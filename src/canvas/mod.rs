//! Canvas preparation shared by the tiler and the feature extractor

pub mod normalizer;
pub mod resample;
#[cfg(test)]
mod tests;

pub use normalizer::{normalize, normalized_edge, NormalizedCanvas};
pub use resample::{resize_exact, ResampleFilter};
