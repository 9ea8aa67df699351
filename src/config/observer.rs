// src/config/observer.rs

//! Checkpoint hooks for configuration loading.
//!
//! The loader reports progress through a [`LoadObserver`] instead of writing
//! diagnostics itself. The CLI installs [`TracingObserver`]; library callers
//! get [`NoopObserver`] unless they inject their own.

use std::fmt;
use std::path::Path;

use tracing::debug;

/// Where a resolved field value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Document,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// Receives loader checkpoints.
///
/// `document_loaded` fires once the XML parses; `field_resolved` then fires
/// per field in output order, stopping at the first field that fails.
pub trait LoadObserver: Send + Sync {
    /// `path` is `None` when loading from an in-memory string.
    fn document_loaded(&self, _path: Option<&Path>, _root_tag: &str) {}

    fn field_resolved(&self, _field: &str, _value: &FieldValue, _source: ValueSource) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {}

/// Emits each checkpoint as a `debug` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn document_loaded(&self, path: Option<&Path>, root_tag: &str) {
        match path {
            Some(path) => debug!(path = %path.display(), root = root_tag, "config document parsed"),
            None => debug!(root = root_tag, "config document parsed from string"),
        }
    }

    fn field_resolved(&self, field: &str, value: &FieldValue, source: ValueSource) {
        debug!(field, %value, ?source, "config field resolved");
    }
}
