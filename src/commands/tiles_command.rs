//! Tile pyramid command
//!
//! Normalizes the floor plan and writes `tile_z{z}_x{x}_y{y}.png` for every
//! zoom level into the output folder.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::config_from_args;
use crate::pipeline::{PlanProcessor, RunRequest};
use crate::plan::config::PipelineConfig;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::logger::Logger;

/// Command for generating the tile pyramid
pub struct TilesCommand<'a> {
    /// Floor plan image
    input_file: PathBuf,
    /// Effective configuration
    config: PipelineConfig,
    /// Draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TilesCommand<'a> {
    /// Create a new tiles command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new TilesCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlanResult<Self> {
        let input_file: PathBuf = args.get_one::<String>("input")
            .ok_or_else(|| PlanError::MissingInput("no input file given".to_string()))?
            .into();

        Ok(TilesCommand {
            input_file,
            config: config_from_args(args)?,
            show_progress: args.get_flag("progress"),
            logger,
        })
    }
}

impl<'a> Command for TilesCommand<'a> {
    fn execute(&self) -> PlanResult<()> {
        info!("Tiling {} into {} (zoom 0..={}, {}px tiles)",
              self.input_file.display(), self.config.output_folder.display(),
              self.config.zoom_limit, self.config.tile_size);

        let processor = PlanProcessor::new(&self.config, self.logger)?.with_progress(self.show_progress);
        let summary = processor.run(&RunRequest::tiles(&self.input_file))?;

        let message = format!("Tile generation successful: {} tiles", summary.tiles.unwrap_or(0));
        info!("{}", message);
        self.logger.log(&message)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tiles"
    }
}
