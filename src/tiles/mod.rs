//! Tile pyramid generation and tile storage

pub mod grid;
pub mod pyramid;
pub mod sink;

pub use grid::{total_tile_count, TileAddress, TileGrid};
pub use pyramid::TilePyramidGenerator;
pub use sink::{DirectoryTileSink, MemoryTileSink, TileSink};
