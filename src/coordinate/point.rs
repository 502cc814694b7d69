//! Geographic feature structures

/// A geo-referenced position in the map viewer's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoPoint {
    /// Vertical coordinate, derived from the pixel row
    pub latitude: i64,
    /// Horizontal coordinate, derived from the pixel column
    pub longitude: i64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(latitude: i64, longitude: i64) -> Self {
        GeoPoint { latitude, longitude }
    }
}

/// A polygon ring mapped into the geographic frame
///
/// Vertex order and ring closure are those of the pixel polygon it was
/// mapped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoPolygon {
    pub(crate) vertices: Vec<GeoPoint>,
}

impl GeoPolygon {
    /// Ring vertices, closing vertex included
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check the ring closure invariant
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }
}
