//! Utility modules for common functionality
//!
//! Logging, progress reporting, value parsing and output file handling
//! shared by the rest of the crate.

pub mod fs_utils;
pub mod logger;
pub mod parse_utils;
pub mod progress;
#[cfg(test)]
mod tests;
