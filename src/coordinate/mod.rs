//! Coordinate handling for geo-referenced features
//!
//! This module maps pixel positions on the normalized canvas into the fixed
//! geographic frame used by the map viewer.

mod frame;
mod point;
mod transform;

// Re-export key types
pub use self::frame::GeoFrame;
pub use self::point::{GeoPoint, GeoPolygon};
pub use self::transform::{pixel_to_geo, GeoCoordinateMapper};
