//! Raster file access
//!
//! Decoding of input images, the gray backdrop copy and the debug mask.
//! Everything else in the crate works on in-memory images.

pub mod image_io;

pub use image_io::{load_raster, save_grayscale, save_mask, to_grayscale};
