//! Tile pyramid generation
//!
//! Every zoom level is rendered by resampling the normalized canvas
//! directly to `2^z * tile_size` pixels and cutting the result into a
//! `2^z x 2^z` grid. Levels are never derived from one another.

use image::{imageops, RgbImage};
use log::{debug, info};

use crate::canvas::{resize_exact, NormalizedCanvas, ResampleFilter};
use crate::plan::errors::PlanResult;
use crate::tiles::grid::{total_tile_count, TileAddress, TileGrid};
use crate::tiles::sink::TileSink;
use crate::utils::progress::ProgressTracker;

/// Slices a normalized canvas into zoom levels `0..=zoom_limit`
#[derive(Debug, Clone, Copy)]
pub struct TilePyramidGenerator {
    /// Top zoom level, inclusive
    zoom_limit: u32,
    /// Filter used to resample each level
    filter: ResampleFilter,
}

impl TilePyramidGenerator {
    /// Create a new generator
    ///
    /// # Arguments
    /// * `zoom_limit` - Top zoom level, inclusive
    /// * `filter` - Resampling filter applied to every level
    pub fn new(zoom_limit: u32, filter: ResampleFilter) -> Self {
        TilePyramidGenerator { zoom_limit, filter }
    }

    /// Number of tiles a full run produces
    pub fn tile_count(&self) -> PlanResult<u64> {
        total_tile_count(self.zoom_limit)
    }

    /// Resample the canvas for one zoom level
    pub fn render_level(&self, canvas: &NormalizedCanvas, grid: &TileGrid) -> RgbImage {
        let size = grid.grid_size();
        resize_exact(&canvas.image, size, size, self.filter)
    }

    /// Cut one tile out of a rendered level
    pub fn crop_tile(level: &RgbImage, grid: &TileGrid, address: TileAddress) -> RgbImage {
        let (left, top) = grid.tile_origin(address.x, address.y);
        imageops::crop_imm(level, left, top, grid.tile_size, grid.tile_size).to_image()
    }

    /// Render every level and hand each tile to `sink`
    ///
    /// # Arguments
    /// * `canvas` - The normalized canvas
    /// * `sink` - Destination for the tiles
    /// * `progress` - Advanced by one per tile written
    ///
    /// # Returns
    /// The number of tiles written
    pub fn generate(&self,
                    canvas: &NormalizedCanvas,
                    sink: &mut dyn TileSink,
                    progress: &ProgressTracker) -> PlanResult<u64> {
        let total = self.tile_count()?;
        info!("Generating tile pyramid: zoom 0..={}, {} tiles, filter {}",
              self.zoom_limit, total, self.filter);

        let mut written = 0u64;
        for zoom in 0..=self.zoom_limit {
            let grid = TileGrid::new(zoom, canvas.tile_size)?;
            progress.set_message(&format!("zoom {}", zoom));

            let level = self.render_level(canvas, &grid);
            debug!("Zoom {}: {}x{} level, {} tiles", zoom, level.width(), level.height(), grid.tile_count());

            for address in grid.addresses() {
                let tile = Self::crop_tile(&level, &grid, address);
                sink.write_tile(address, &tile)?;
                progress.increment(1);
                written += 1;
            }
        }

        info!("Tile pyramid complete: {} tiles", written);
        Ok(written)
    }
}
