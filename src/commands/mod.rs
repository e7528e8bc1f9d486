//! CLI command implementations
//!
//! Each command wraps one `SrsKit` round trip behind the Command pattern.

pub mod command_traits;
pub mod compare_command;
pub mod translate_command;

pub use command_traits::{Command, CommandFactory};
pub use compare_command::CompareCommand;
pub use translate_command::TranslateCommand;

use clap::ArgMatches;
use crate::api::SrsKit;
use crate::srs::SrsResult;
use crate::utils::logger::Logger;

/// Build the library façade the CLI arguments ask for
///
/// `--dictionary` loads a TOML dictionary; without it only inputs that need
/// no EPSG lookup will resolve.
pub(crate) fn kit_from_args(args: &ArgMatches) -> SrsResult<SrsKit> {
    match args.get_one::<String>("dictionary") {
        Some(path) => SrsKit::from_dictionary_file(path),
        None => Ok(SrsKit::new()),
    }
}

/// Factory for creating command instances based on CLI arguments
pub struct SrskitCommandFactory;

impl SrskitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SrskitCommandFactory
    }
}

impl Default for SrskitCommandFactory {
    fn default() -> Self {
        SrskitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for SrskitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SrsResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("compare").is_some() {
            Ok(Box::new(CompareCommand::new(args, logger)?))
        } else {
            Ok(Box::new(TranslateCommand::new(args, logger)?))
        }
    }
}
