//! Command pattern interfaces
//!
//! Every CLI mode is a [`Command`]; the factory picks one from the parsed
//! arguments so that `main` only has to execute it.

use crate::plan::errors::PlanResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> PlanResult<()>;

    /// Short name used in log messages
    fn name(&self) -> &'static str;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> PlanResult<Box<dyn Command + 'a>>;
}
