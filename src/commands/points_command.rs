//! Point feature command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::config_from_args;
use crate::pipeline::{PlanProcessor, RunRequest};
use crate::plan::config::PipelineConfig;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::logger::Logger;

/// Writes one CSV row per marker blob of the marked image
pub struct PointsCommand<'a> {
    /// Image the markers are read from
    marked_file: PathBuf,
    config: PipelineConfig,
    logger: &'a Logger,
}

impl<'a> PointsCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlanResult<Self> {
        let marked_file: PathBuf = args.get_one::<String>("marked")
            .or_else(|| args.get_one::<String>("input"))
            .ok_or_else(|| PlanError::MissingInput("no marked image given".to_string()))?
            .into();

        Ok(PointsCommand {
            marked_file,
            config: config_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for PointsCommand<'a> {
    fn execute(&self) -> PlanResult<()> {
        info!("Extracting point features from {}", self.marked_file.display());

        let processor = PlanProcessor::new(&self.config, self.logger)?;
        let summary = processor.run(&RunRequest::points(&self.marked_file))?;

        let message = format!("Point extraction successful: {} points", summary.points.unwrap_or(0));
        info!("{}", message);
        self.logger.log(&message)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "points"
    }
}
