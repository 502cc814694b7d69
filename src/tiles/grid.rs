//! Tile addressing

use std::fmt;

use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::parse_utils::parse_tile_name;

/// Address of one tile in the pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileAddress {
    /// Zoom level
    pub z: u32,
    /// Column within the level
    pub x: u32,
    /// Row within the level
    pub y: u32,
}

impl TileAddress {
    /// Create a new tile address
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        TileAddress { z, x, y }
    }

    /// File name the tile is stored under
    pub fn file_name(&self) -> String {
        format!("tile_z{}_x{}_y{}.png", self.z, self.x, self.y)
    }

    /// Recover an address from a tile file name
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        parse_tile_name(file_name).map(|(z, x, y)| TileAddress::new(z, x, y))
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Tile layout of a single zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Zoom level
    pub zoom: u32,
    /// Tile edge in pixels
    pub tile_size: u32,
}

impl TileGrid {
    /// Create the grid for `zoom`
    ///
    /// Fails when the resampled level would not be addressable with `u32`.
    pub fn new(zoom: u32, tile_size: u32) -> PlanResult<Self> {
        let grid = TileGrid { zoom, tile_size };
        grid.checked_grid_size().ok_or_else(|| {
            PlanError::InvalidConfig(format!(
                "Zoom level {} with tile size {} exceeds the addressable canvas size",
                zoom, tile_size))
        })?;
        Ok(grid)
    }

    /// Tiles per axis (2^z)
    pub fn grid_count(&self) -> u32 {
        1 << self.zoom
    }

    /// Edge of the resampled level in pixels (2^z * tile size)
    pub fn grid_size(&self) -> u32 {
        self.grid_count() * self.tile_size
    }

    fn checked_grid_size(&self) -> Option<u32> {
        1u32.checked_shl(self.zoom)?.checked_mul(self.tile_size)
    }

    /// Number of tiles in this level (4^z)
    pub fn tile_count(&self) -> u64 {
        u64::from(self.grid_count()) * u64::from(self.grid_count())
    }

    /// Pixel rectangle (left, top) of a tile within the resampled level
    pub fn tile_origin(&self, x: u32, y: u32) -> (u32, u32) {
        (x * self.tile_size, y * self.tile_size)
    }

    /// Every address in the level, column-major (x outer, y inner)
    pub fn addresses(&self) -> impl Iterator<Item = TileAddress> {
        let zoom = self.zoom;
        let count = self.grid_count();
        (0..count).flat_map(move |x| (0..count).map(move |y| TileAddress::new(zoom, x, y)))
    }
}

/// Total tiles across zoom levels `0..=zoom_limit`
///
/// Fails once the count no longer fits a `u64` (zoom 32 and above).
pub fn total_tile_count(zoom_limit: u32) -> PlanResult<u64> {
    (0..=zoom_limit).try_fold(0u64, |total, z| {
        z.checked_mul(2)
            .and_then(|shift| 1u64.checked_shl(shift))
            .and_then(|level| total.checked_add(level))
            .ok_or_else(|| PlanError::InvalidConfig(format!(
                "Zoom limit {} produces more tiles than can be counted", zoom_limit)))
    })
}
