//! Custom error types for floor plan processing

use std::fmt;
use std::io;

/// Errors raised while tiling a floor plan or extracting its features
#[derive(Debug)]
pub enum PlanError {
    /// I/O error
    IoError(io::Error),
    /// Image decode or encode failure
    ImageError(image::ImageError),
    /// Configuration value rejected by validation
    InvalidConfig(String),
    /// Configuration file could not be parsed
    ConfigParse(String),
    /// Input image missing or unreadable
    MissingInput(String),
    /// KML document could not be written
    XmlError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::IoError(e) => write!(f, "I/O error: {}", e),
            PlanError::ImageError(e) => write!(f, "Image error: {}", e),
            PlanError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlanError::ConfigParse(msg) => write!(f, "Failed to parse configuration: {}", msg),
            PlanError::MissingInput(path) => write!(f, "Input image not found or unreadable: {}", path),
            PlanError::XmlError(msg) => write!(f, "XML error: {}", msg),
            PlanError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::IoError(e) => Some(e),
            PlanError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PlanError {
    fn from(error: io::Error) -> Self {
        PlanError::IoError(error)
    }
}

impl From<image::ImageError> for PlanError {
    fn from(error: image::ImageError) -> Self {
        PlanError::ImageError(error)
    }
}

impl From<String> for PlanError {
    fn from(msg: String) -> Self {
        PlanError::GenericError(msg)
    }
}

/// Result type for floor plan operations
pub type PlanResult<T> = Result<T, PlanError>;
