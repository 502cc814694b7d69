pub mod api;
pub mod canvas;
pub mod commands;
pub mod coordinate;
pub mod export;
pub mod features;
pub mod io;
pub mod pipeline;
pub mod plan;
pub mod tiles;
pub mod utils;

pub use crate::api::PlanTiles;

pub use canvas::{normalize, NormalizedCanvas};
pub use coordinate::{GeoCoordinateMapper, GeoPoint, GeoPolygon};
pub use features::{ColorMask, ColorMaskExtractor, ContourPolygonExtractor};
pub use pipeline::RunRequest;
pub use plan::{PipelineConfig, PlanError, PlanResult};
pub use tiles::{TilePyramidGenerator, TileSink};
