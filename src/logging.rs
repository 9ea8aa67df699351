// src/logging.rs

//! Logging setup for `depviz` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `DEPVIZ_LOG` environment variable, as `EnvFilter` directives
//!    (e.g. "debug" or "depviz::config=trace")
//! 3. default to `warn`
//!
//! The printed configuration is the only thing on stdout; logs go to
//! STDERR and stay quiet unless something is wrong or asked for.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "DEPVIZ_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let directives = filter_directives(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref());

    fmt()
        .with_env_filter(EnvFilter::try_new(directives)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Blank or unparseable `DEPVIZ_LOG` values fall back to the default.
fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return lvl.directive().to_string();
    }

    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty() && EnvFilter::try_new(value).is_ok())
        .unwrap_or(DEFAULT_DIRECTIVES)
        .to_string()
}
