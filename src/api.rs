use std::path::Path;
use image::RgbImage;
use log::info;

use crate::export::RunSummary;
use crate::io::save_grayscale;
use crate::pipeline::{ExtractedFeatures, PlanProcessor, RunRequest};
use crate::plan::config::PipelineConfig;
use crate::plan::constants::files;
use crate::plan::errors::PlanResult;
use crate::tiles::MemoryTileSink;
use crate::utils::logger::Logger;

/// Main interface to the plantiles library
pub struct PlanTiles {
    logger: Logger,
    config: PipelineConfig,
    show_progress: bool,
}

impl PlanTiles {
    /// Create a new PlanTiles instance
    ///
    /// # Arguments
    /// * `config` - Pipeline configuration, validated here
    /// * `log_file` - Optional path to the operation log, defaults to "plantiles.log"
    ///
    /// # Returns
    /// A PlanTiles instance or an error if the configuration or log file is unusable
    pub fn new(config: PipelineConfig, log_file: Option<&str>) -> PlanResult<Self> {
        let log_path = log_file.unwrap_or(files::LOG_FILE);
        let logger = Logger::new(log_path)?;
        Self::with_logger(config, logger)
    }

    /// Create an instance with an existing logger
    ///
    /// Pass [`Logger::null`] to keep no operation log.
    pub fn with_logger(config: PipelineConfig, logger: Logger) -> PlanResult<Self> {
        config.validate()?;
        Ok(PlanTiles {
            logger,
            config,
            show_progress: false,
        })
    }

    /// Draw a progress bar while tiles are written
    pub fn set_progress(&mut self, show: bool) {
        self.show_progress = show;
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn processor(&self) -> PlanResult<PlanProcessor<'_>> {
        Ok(PlanProcessor::new(&self.config, &self.logger)?.with_progress(self.show_progress))
    }

    /// Generate the tile pyramid of a floor plan
    ///
    /// # Arguments
    /// * `input_path` - Floor plan image
    ///
    /// # Returns
    /// The run summary, also written to the output folder
    pub fn generate_tiles<P: AsRef<Path>>(&self, input_path: P) -> PlanResult<RunSummary> {
        self.processor()?.run(&RunRequest::tiles(input_path))
    }

    /// Write the point features of a marked image as `output.csv`
    pub fn extract_points<P: AsRef<Path>>(&self, marked_path: P) -> PlanResult<RunSummary> {
        self.processor()?.run(&RunRequest::points(marked_path))
    }

    /// Write the polygon features of a marked image as `output.kml`
    pub fn extract_polygons<P: AsRef<Path>>(&self, marked_path: P) -> PlanResult<RunSummary> {
        self.processor()?.run(&RunRequest::polygons(marked_path))
    }

    /// Tile a floor plan and extract both feature sets in one run
    ///
    /// # Arguments
    /// * `input_path` - Floor plan image
    /// * `marked_path` - Marked companion image; the floor plan itself is used when absent
    ///
    /// # Returns
    /// The run summary, also written to the output folder
    pub fn run_pipeline<P: AsRef<Path>, Q: AsRef<Path>>(&self,
                                                        input_path: P,
                                                        marked_path: Option<Q>) -> PlanResult<RunSummary> {
        self.processor()?.run(&RunRequest::pipeline(input_path, marked_path))
    }

    /// Write a gray copy of a floor plan
    ///
    /// # Arguments
    /// * `input_path` - Floor plan image
    /// * `output_path` - PNG file to write
    ///
    /// # Returns
    /// The (width, height) of the written image
    pub fn grayscale<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_path: Q) -> PlanResult<(u32, u32)> {
        let output_path = output_path.as_ref();
        let size = save_grayscale(input_path, output_path)?;
        self.logger.log(&format!("Grayscale copy written to {}", output_path.display()))?;
        Ok(size)
    }

    /// Tile an in-memory raster without touching the file system
    pub fn tile_image(&self, raster: &RgbImage) -> PlanResult<MemoryTileSink> {
        let processor = self.processor()?;
        let canvas = processor.normalize(raster)?;
        let mut sink = MemoryTileSink::new();
        let written = processor.tile(&canvas, &mut sink)?;
        info!("Rendered {} tiles in memory", written);
        Ok(sink)
    }

    /// Extract features from an in-memory marked raster
    pub fn extract_features(&self, marked: &RgbImage) -> PlanResult<ExtractedFeatures> {
        let processor = self.processor()?;
        let canvas = processor.normalize(marked)?;
        processor.extract_features(&canvas)
    }
}
