use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use srskit::utils::logger::Logger;
use srskit::commands::{CommandFactory, SrskitCommandFactory};

fn main() {
    let matches = ClapCommand::new("srskit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate and compare spatial reference definitions")
        .arg(
            Arg::new("input")
                .help("Definition: WKT, EPSG:n, URN, URL, PROJ string, well-known name or file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output encoding")
                .value_name("FORMAT")
                .value_parser(["wkt", "pretty", "proj4", "xml", "panorama"])
                .default_value("wkt"),
        )
        .arg(
            Arg::new("simplify")
                .long("simplify")
                .help("Strip authorities, axes and datum shifts from pretty WKT")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dictionary")
                .short('d')
                .long("dictionary")
                .help("TOML dictionary used to resolve EPSG codes")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("compare")
                .short('c')
                .long("compare")
                .help("Report whether the input and this definition are the same")
                .value_name("DEFINITION")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write a transcript of parsed definitions to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    Logger::init_console(matches.get_flag("verbose"));

    let logger = match matches.get_one::<String>("log-file") {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = SrskitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    let status = match command_result {
        Ok(command) => match command.execute() {
            Ok(()) => 0,
            Err(e) => {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    };

    srskit::srs::cleanup();
    process::exit(status);
}
