// src/errors.rs

//! Crate-wide error type for configuration loading.
//!
//! The loader never terminates the process; every failure surfaces as a
//! [`ConfigError`] and the CLI decides how to report it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML. `row` and `column` are 1-based.
    #[error("{message} (line {row}, column {column})")]
    XmlSyntax {
        row: u64,
        column: u64,
        message: String,
    },

    #[error("Missing required parameter: {field}")]
    MissingRequiredField { field: String },

    /// `value` is the raw element text, untrimmed.
    #[error("Invalid boolean value for {field}: {value}")]
    InvalidBooleanValue { field: String, value: String },
}

impl From<xml::reader::Error> for ConfigError {
    fn from(err: xml::reader::Error) -> Self {
        use xml::common::Position;

        // xml-rs renders errors as "<row>:<col> <message>"; keep the message
        // and carry the position as structured fields instead.
        let pos = err.position();
        let rendered = err.to_string();
        let message = rendered
            .strip_prefix(&format!("{pos} "))
            .unwrap_or(&rendered)
            .to_string();

        ConfigError::XmlSyntax {
            row: pos.row + 1,
            column: pos.column + 1,
            message,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
