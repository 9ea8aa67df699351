// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod output;

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::{ConfigLoader, TracingObserver};
use crate::errors::{ConfigError, Result};
use crate::output::ConfigPrinter;

/// High-level entry point used by `main.rs`.
///
/// Checks that the config file exists, loads it with a tracing observer
/// attached and prints the resolved configuration to stdout.
pub fn run(args: &CliArgs) -> Result<()> {
    let loader = ConfigLoader::new().with_observer(Arc::new(TracingObserver));
    let stdout = std::io::stdout();
    run_with(args, &loader, &mut stdout.lock())
}

/// Same as [`run`] with an explicit loader and output sink.
///
/// The existence check goes through the loader's filesystem; when the file
/// is missing the loader is never invoked.
pub fn run_with<W: Write>(args: &CliArgs, loader: &ConfigLoader, out: &mut W) -> Result<()> {
    if !loader.fs().exists(&args.config) {
        return Err(ConfigError::FileNotFound(args.config.clone()));
    }

    let cfg = loader.load(&args.config)?;
    info!(package = %cfg.package_name, "configuration resolved");

    ConfigPrinter::new(args.format).write(out, &cfg)?;
    Ok(())
}

/// Human-readable line printed by the CLI before exiting with status 1.
pub fn failure_message(err: &ConfigError) -> String {
    match err {
        ConfigError::XmlSyntax { .. } => format!("Error parsing XML config: {err}"),
        ConfigError::FileNotFound(_) => err.to_string(),
        _ => format!("Error loading config: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::fs::mock::MockFileSystem;
    use crate::output::OutputFormat;

    fn args(path: &str) -> CliArgs {
        CliArgs {
            config: PathBuf::from(path),
            log_level: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn missing_file_never_reaches_loader() {
        let fs = MockFileSystem::new();
        let loader = ConfigLoader::new().with_fs(Arc::new(fs.clone()));

        let mut out = Vec::new();
        let err = run_with(&args("absent.xml"), &loader, &mut out).unwrap_err();

        assert!(matches!(err, ConfigError::FileNotFound(_)));
        assert_eq!(failure_message(&err), "Config file not found: absent.xml");
        assert_eq!(fs.read_count(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn prints_resolved_configuration() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "c.xml",
            "<c><package_name>foo</package_name><repository_url>http://x</repository_url></c>",
        );
        let loader = ConfigLoader::new().with_fs(Arc::new(fs));

        let mut out = Vec::new();
        run_with(&args("c.xml"), &loader, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Configuration parameters:\n"));
        assert!(text.contains("  package_name: foo\n"));
        assert!(text.contains("  output_image: graph.png\n"));
    }

    #[test]
    fn failure_messages_are_prefixed_by_kind() {
        let syntax = ConfigError::XmlSyntax {
            row: 1,
            column: 5,
            message: "unexpected end of stream".into(),
        };
        assert_eq!(
            failure_message(&syntax),
            "Error parsing XML config: unexpected end of stream (line 1, column 5)"
        );

        let missing = ConfigError::MissingRequiredField {
            field: "repository_url".into(),
        };
        assert_eq!(
            failure_message(&missing),
            "Error loading config: Missing required parameter: repository_url"
        );

        let boolean = ConfigError::InvalidBooleanValue {
            field: "test_repo_mode".into(),
            value: "maybe".into(),
        };
        assert_eq!(
            failure_message(&boolean),
            "Error loading config: Invalid boolean value for test_repo_mode: maybe"
        );
    }
}
