//! Destinations for generated tiles
//!
//! The pyramid generator never touches the file system directly; it hands
//! every tile to a [`TileSink`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use image::RgbImage;
use log::debug;

use crate::plan::errors::{PlanError, PlanResult};
use crate::tiles::grid::TileAddress;
use crate::utils::fs_utils;

/// Receiver of rendered tiles
pub trait TileSink {
    /// Store one tile
    ///
    /// # Arguments
    /// * `address` - Position of the tile in the pyramid
    /// * `tile` - Tile pixels, exactly tile size by tile size
    ///
    /// # Returns
    /// Result indicating success or an error
    fn write_tile(&mut self, address: TileAddress, tile: &RgbImage) -> PlanResult<()>;
}

/// Writes every tile as a PNG file into one directory
pub struct DirectoryTileSink {
    /// Target directory
    dir: PathBuf,
}

impl DirectoryTileSink {
    /// Prepare `dir` for a fresh tile set
    ///
    /// Creates the directory if needed and removes tiles from an earlier run,
    /// so an interrupted run cannot be mistaken for a complete pyramid mixed
    /// with old tiles.
    pub fn create<P: AsRef<Path>>(dir: P) -> PlanResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs_utils::ensure_dir(&dir)?;
        fs_utils::remove_stale_tiles(&dir)?;

        Ok(DirectoryTileSink { dir })
    }

    /// Path a tile is stored at
    pub fn tile_path(&self, address: TileAddress) -> PathBuf {
        self.dir.join(address.file_name())
    }
}

impl TileSink for DirectoryTileSink {
    fn write_tile(&mut self, address: TileAddress, tile: &RgbImage) -> PlanResult<()> {
        let path = self.tile_path(address);
        tile.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| PlanError::GenericError(format!("Failed to write tile {}: {}", path.display(), e)))?;
        debug!("Wrote tile {}", address);
        Ok(())
    }
}

/// Keeps tiles in memory, ordered by address
#[derive(Debug, Default)]
pub struct MemoryTileSink {
    tiles: BTreeMap<TileAddress, RgbImage>,
}

impl MemoryTileSink {
    pub fn new() -> Self {
        MemoryTileSink::default()
    }

    pub fn get(&self, address: TileAddress) -> Option<&RgbImage> {
        self.tiles.get(&address)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn addresses(&self) -> impl Iterator<Item = &TileAddress> {
        self.tiles.keys()
    }

    pub fn into_tiles(self) -> BTreeMap<TileAddress, RgbImage> {
        self.tiles
    }
}

impl TileSink for MemoryTileSink {
    fn write_tile(&mut self, address: TileAddress, tile: &RgbImage) -> PlanResult<()> {
        self.tiles.insert(address, tile.clone());
        Ok(())
    }
}
