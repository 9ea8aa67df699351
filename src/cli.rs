// src/cli.rs

//! CLI argument parsing using `clap`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Printed to stdout whenever the arguments cannot be parsed.
pub const USAGE: &str = "Usage: depviz <config.xml>\nExample: depviz File.xml";

/// Command-line arguments for `depviz`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depviz",
    version,
    about = "Load, validate and print a depviz XML configuration.",
    override_usage = "depviz [OPTIONS] <config.xml>",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the XML config file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPVIZ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// How to print the resolved configuration.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse arguments from an explicit iterator (first item is the program name).
pub fn try_parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

/// Parse process arguments.
///
/// `--help` and `--version` keep clap's behaviour. Any other parse failure,
/// including a wrong number of positional arguments, prints [`USAGE`] to
/// stdout and exits with status 1.
pub fn parse() -> CliArgs {
    match try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    }
}
