//! Gray backdrop command
//!
//! Writes a gray copy of the floor plan into the output folder. Markers are
//! painted onto this copy in the reserved color, and the result is passed
//! back as `--marked`.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::options::config_from_args;
use crate::io::save_grayscale;
use crate::plan::constants::files;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::logger::Logger;

/// Command converting the floor plan to grayscale
pub struct GrayscaleCommand<'a> {
    input_file: PathBuf,
    output_file: PathBuf,
    logger: &'a Logger,
}

impl<'a> GrayscaleCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> PlanResult<Self> {
        let input_file: PathBuf = args.get_one::<String>("input")
            .ok_or_else(|| PlanError::MissingInput("no input file given".to_string()))?
            .into();
        let config = config_from_args(args)?;

        Ok(GrayscaleCommand {
            input_file,
            output_file: config.output_folder.join(files::GRAYSCALE),
            logger,
        })
    }
}

impl<'a> Command for GrayscaleCommand<'a> {
    fn execute(&self) -> PlanResult<()> {
        info!("Converting {} to grayscale", self.input_file.display());

        let (width, height) = save_grayscale(&self.input_file, &self.output_file)?;

        let message = format!("Grayscale conversion successful: {} ({}x{})",
                              self.output_file.display(), width, height);
        info!("{}", message);
        self.logger.log(&message)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "grayscale"
    }
}
