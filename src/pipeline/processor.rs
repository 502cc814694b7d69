//! Floor plan processing runs

use std::path::Path;
use image::RgbImage;
use log::{info, warn};

use crate::canvas::{normalize, NormalizedCanvas};
use crate::coordinate::{GeoCoordinateMapper, GeoPoint, GeoPolygon};
use crate::export::{save_points_csv, save_polygons_kml, RunSummary};
use crate::features::{locate_centroids, ColorMask, ColorMaskExtractor, ContourPolygonExtractor};
use crate::io::{load_raster, save_mask};
use crate::pipeline::request::RunRequest;
use crate::plan::config::PipelineConfig;
use crate::plan::constants::files;
use crate::plan::errors::PlanResult;
use crate::plan::types::{Centroid, Polygon};
use crate::tiles::{DirectoryTileSink, TilePyramidGenerator, TileSink};
use crate::utils::fs_utils::ensure_dir;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Features recovered from one marked canvas, in pixel and geographic space
#[derive(Debug, Clone)]
pub struct ExtractedFeatures {
    pub mask: ColorMask,
    pub mapper: GeoCoordinateMapper,
    pub centroids: Vec<Centroid>,
    pub polygons: Vec<Polygon>,
}

impl ExtractedFeatures {
    /// Centroids mapped into the geographic frame
    pub fn geo_points(&self) -> Vec<GeoPoint> {
        self.centroids.iter().map(|c| self.mapper.map_point(*c)).collect()
    }

    /// Rings mapped into the geographic frame
    pub fn geo_polygons(&self) -> Vec<GeoPolygon> {
        self.polygons.iter().map(|p| self.mapper.map_polygon(p)).collect()
    }
}

/// Runs the tiler and the feature extractor under one configuration
pub struct PlanProcessor<'a> {
    config: &'a PipelineConfig,
    logger: &'a Logger,
    show_progress: bool,
}

impl<'a> PlanProcessor<'a> {
    /// Create a new processor
    ///
    /// # Arguments
    /// * `config` - Validated here, so every later step can rely on it
    /// * `logger` - Operation log
    ///
    /// # Returns
    /// A processor or the first configuration error
    pub fn new(config: &'a PipelineConfig, logger: &'a Logger) -> PlanResult<Self> {
        config.validate()?;
        Ok(PlanProcessor {
            config,
            logger,
            show_progress: false,
        })
    }

    /// Draw a progress bar while tiles are written
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        self.config
    }

    /// Pad a raster onto its normalized canvas
    pub fn normalize(&self, raster: &RgbImage) -> PlanResult<NormalizedCanvas> {
        normalize(raster, self.config.background(), self.config.tile_size)
    }

    /// Load an image file and normalize it
    pub fn prepare_canvas(&self, path: &Path) -> PlanResult<NormalizedCanvas> {
        let raster = load_raster(path)?;
        self.normalize(&raster)
    }

    /// Write the whole pyramid of `canvas` into `sink`
    pub fn tile(&self, canvas: &NormalizedCanvas, sink: &mut dyn TileSink) -> PlanResult<u64> {
        let generator = TilePyramidGenerator::new(self.config.zoom_limit, self.config.resample_filter);
        let total = generator.tile_count()?;
        let progress = if self.show_progress {
            ProgressTracker::new(total, "Generating tiles")
        } else {
            ProgressTracker::hidden(total)
        };

        match generator.generate(canvas, sink, &progress) {
            Ok(written) => {
                progress.finish();
                Ok(written)
            }
            Err(e) => {
                progress.abandon();
                Err(e)
            }
        }
    }

    /// Segment, label and trace the marker color of `canvas`
    pub fn extract_features(&self, canvas: &NormalizedCanvas) -> PlanResult<ExtractedFeatures> {
        let extractor = ColorMaskExtractor::new(self.config.mask_settings())?;
        let mask = extractor.extract(&canvas.image)?;
        let mapper = GeoCoordinateMapper::for_mask(&mask)?;

        let centroids = locate_centroids(&mask);
        let contours = ContourPolygonExtractor::new(self.config.contour_mode, self.config.simplify_epsilon)?;
        let polygons = contours.extract(&mask);
        info!("Found {} marker components and {} boundary rings", centroids.len(), polygons.len());

        Ok(ExtractedFeatures {
            mask,
            mapper,
            centroids,
            polygons,
        })
    }

    /// Execute a run against the configured output folder
    ///
    /// The previous summary is removed first and the new one is written
    /// only after every requested artifact was produced.
    ///
    /// # Arguments
    /// * `request` - Inputs and artifacts of the run
    ///
    /// # Returns
    /// The summary that was written
    pub fn run(&self, request: &RunRequest) -> PlanResult<RunSummary> {
        request.validate()?;
        let output = self.config.output_folder.as_path();
        ensure_dir(output)?;
        RunSummary::invalidate(output)?;

        let mut summary = RunSummary::new();
        summary.input = request.input.clone();
        let mut plan_canvas = None;

        if let (true, Some(input)) = (request.tiles, request.input.as_deref()) {
            let canvas = self.prepare_canvas(input)?;
            let mut sink = DirectoryTileSink::create(output)?;
            let written = self.tile(&canvas, &mut sink)?;
            self.logger.log(&format!("Wrote {} tiles for {} to {}", written, input.display(), output.display()))?;

            summary.canvas_edge = Some(canvas.edge());
            summary.tiles = Some(written);
            plan_canvas = Some(canvas);
        }

        if let (true, Some(source)) = (request.wants_features(), request.feature_source()) {
            let canvas = match plan_canvas.take() {
                Some(canvas) if request.marked.is_none() => canvas,
                Some(canvas) => {
                    let marked = self.prepare_canvas(source)?;
                    if (marked.source_width, marked.source_height) != (canvas.source_width, canvas.source_height) {
                        warn!("Marked image is {}x{} but the floor plan is {}x{}; features will not line up with the tiles",
                              marked.source_width, marked.source_height, canvas.source_width, canvas.source_height);
                    }
                    marked
                }
                None => self.prepare_canvas(source)?,
            };
            summary.marked = Some(source.to_path_buf());
            summary.canvas_edge.get_or_insert(canvas.edge());

            let features = self.extract_features(&canvas)?;
            if self.config.save_mask_debug {
                save_mask(&features.mask.mask, output.join(files::MASK_DEBUG))?;
            }

            if request.points {
                let rows = save_points_csv(&output.join(files::POINTS_CSV), &features.centroids, &features.mapper)?;
                self.logger.log(&format!("Wrote {} points from {}", rows, source.display()))?;
                summary.points = Some(rows);
            }
            if request.polygons {
                let placemarks = save_polygons_kml(&output.join(files::POLYGONS_KML), &features.polygons, &features.mapper)?;
                self.logger.log(&format!("Wrote {} polygons from {}", placemarks, source.display()))?;
                summary.polygons = Some(placemarks);
            }
        }

        summary.save(output, self.config)?;
        Ok(summary)
    }
}
