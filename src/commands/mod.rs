//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod grayscale_command;
pub mod options;
pub mod pipeline_command;
pub mod points_command;
pub mod polygons_command;
pub mod tiles_command;
#[cfg(test)]
mod tests;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use grayscale_command::GrayscaleCommand;
pub use pipeline_command::PipelineCommand;
pub use points_command::PointsCommand;
pub use polygons_command::PolygonsCommand;
pub use tiles_command::TilesCommand;

use clap::ArgMatches;
use crate::plan::errors::PlanResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// `--grayscale` stands alone. Otherwise a single mode flag maps onto its own
/// command, several flags (or `--all`) onto the combined pipeline, and no flag
/// at all onto tiling.
pub struct PlantilesCommandFactory;

impl PlantilesCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PlantilesCommandFactory
    }
}

impl Default for PlantilesCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for PlantilesCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> PlanResult<Box<dyn Command + 'a>> {
        let modes = [args.get_flag("tiles"), args.get_flag("points"), args.get_flag("polygons")];
        let selected = modes.iter().filter(|m| **m).count();

        if args.get_flag("grayscale") {
            Ok(Box::new(GrayscaleCommand::new(args, logger)?))
        } else if args.get_flag("all") || selected > 1 {
            Ok(Box::new(PipelineCommand::new(args, logger)?))
        } else if args.get_flag("points") {
            Ok(Box::new(PointsCommand::new(args, logger)?))
        } else if args.get_flag("polygons") {
            Ok(Box::new(PolygonsCommand::new(args, logger)?))
        } else {
            Ok(Box::new(TilesCommand::new(args, logger)?))
        }
    }
}
