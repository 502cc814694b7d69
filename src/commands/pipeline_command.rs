//! Combined run command
//!
//! Used for `--all` and for any combination of mode flags, so that the
//! canvas is normalized once and a single summary covers every artifact.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::{config_from_args, request_from_args};
use crate::pipeline::{PlanProcessor, RunRequest};
use crate::plan::config::PipelineConfig;
use crate::plan::errors::PlanResult;
use crate::utils::logger::Logger;

/// Command running several artifacts in one pass
pub struct PipelineCommand<'a> {
    request: RunRequest,
    config: PipelineConfig,
    show_progress: bool,
    logger: &'a Logger,
}

impl<'a> PipelineCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlanResult<Self> {
        let request = request_from_args(args)?;
        request.validate()?;

        Ok(PipelineCommand {
            request,
            config: config_from_args(args)?,
            show_progress: args.get_flag("progress"),
            logger,
        })
    }
}

impl<'a> Command for PipelineCommand<'a> {
    fn execute(&self) -> PlanResult<()> {
        info!("Running pipeline into {} (tiles: {}, points: {}, polygons: {})",
              self.config.output_folder.display(),
              self.request.tiles, self.request.points, self.request.polygons);

        let processor = PlanProcessor::new(&self.config, self.logger)?.with_progress(self.show_progress);
        let summary = processor.run(&self.request)?;

        let message = format!("Pipeline successful: {} tiles, {} points, {} polygons",
                              summary.tiles.unwrap_or(0),
                              summary.points.unwrap_or(0),
                              summary.polygons.unwrap_or(0));
        info!("{}", message);
        self.logger.log(&message)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
