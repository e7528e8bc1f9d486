//! Translation command
//!
//! Parses one user input and prints it in the requested encoding.

use clap::ArgMatches;
use log::info;

use crate::api::{OutputFormat, SrsKit};
use crate::commands::command_traits::Command;
use crate::commands::kit_from_args;
use crate::srs::{SrsError, SrsResult};
use crate::utils::logger::Logger;

/// Command for printing a definition in another encoding
pub struct TranslateCommand<'a> {
    /// Definition as given on the command line
    input: String,
    /// Target encoding
    format: OutputFormat,
    /// Strip authorities and datum shifts from pretty WKT
    simplify: bool,
    kit: SrsKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TranslateCommand<'a> {
    /// Create a new translate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new TranslateCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SrsResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| SrsError::Failure("Missing input definition".to_string()))?
            .clone();

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::Wkt,
        };

        Ok(TranslateCommand {
            input,
            format,
            simplify: args.get_flag("simplify"),
            kit: kit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for TranslateCommand<'a> {
    fn execute(&self) -> SrsResult<()> {
        info!("Translating '{}' to {}", self.input, self.format);

        let output = self.kit.translate(&self.input, self.format, self.simplify)?;
        self.logger.log_block(&format!("{} as {}", self.input, self.format), &output)?;

        println!("{}", output);
        Ok(())
    }
}
