//! Comparison command

use clap::ArgMatches;
use log::info;

use crate::api::SrsKit;
use crate::commands::command_traits::Command;
use crate::commands::kit_from_args;
use crate::srs::{SrsError, SrsResult};
use crate::utils::logger::Logger;

/// Command reporting whether two inputs describe the same system
pub struct CompareCommand<'a> {
    first: String,
    second: String,
    kit: SrsKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CompareCommand<'a> {
    /// Create a new compare command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap; `input` and `compare` are both required
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SrsResult<Self> {
        let first = args.get_one::<String>("input")
            .ok_or_else(|| SrsError::Failure("Missing input definition".to_string()))?
            .clone();
        let second = args.get_one::<String>("compare")
            .ok_or_else(|| SrsError::Failure("Missing definition to compare against".to_string()))?
            .clone();

        Ok(CompareCommand {
            first,
            second,
            kit: kit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for CompareCommand<'a> {
    fn execute(&self) -> SrsResult<()> {
        info!("Comparing '{}' with '{}'", self.first, self.second);

        let same = self.kit.is_same(&self.first, &self.second)?;
        let verdict = if same { "same" } else { "different" };
        self.logger.log(&format!("{} vs {}: {}", self.first, self.second, verdict))?;

        println!("{}", verdict);
        Ok(())
    }
}
