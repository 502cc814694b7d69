//! Pixel-space feature structures

use std::fmt;

/// Integer pixel coordinate on a canvas
///
/// Used both for component centroids and for polygon vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Column, counted from the left edge
    pub x: u32,
    /// Row, counted from the top edge
    pub y: u32,
}

impl PixelPoint {
    /// Create a new pixel coordinate
    pub fn new(x: u32, y: u32) -> Self {
        PixelPoint { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Centroid of one labeled mask component
pub type Centroid = PixelPoint;

/// Closed ring of pixel coordinates
///
/// The first and last vertex are always identical; the only way to build a
/// polygon is through [`Polygon::closed`], which appends the closing vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<PixelPoint>,
}

impl Polygon {
    /// Build a closed ring from an open boundary trace
    ///
    /// The first vertex is appended at the end regardless of whether the
    /// trace already ends on it. Returns `None` for an empty trace.
    pub fn closed(mut boundary: Vec<PixelPoint>) -> Option<Self> {
        let first = *boundary.first()?;
        boundary.push(first);
        Some(Polygon { vertices: boundary })
    }

    /// Ring vertices, closing vertex included
    pub fn vertices(&self) -> &[PixelPoint] {
        &self.vertices
    }

    /// Number of vertices, closing vertex included
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a ring holds at least its start and closing vertex
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check the ring closure invariant
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }
}
