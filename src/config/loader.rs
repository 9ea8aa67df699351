// src/config/loader.rs

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::model::{
    ASCII_TREE_MODE, Configuration, DEFAULT_OUTPUT_FILE, OUTPUT_IMAGE, PACKAGE_NAME,
    REPOSITORY_URL, TEST_REPO_MODE,
};
use crate::config::observer::{FieldValue, LoadObserver, NoopObserver, ValueSource};
use crate::config::validate::{optional_flag, optional_text, required_text};
use crate::config::document::{XmlElement, parse_document};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Turns an XML document into a validated [`Configuration`].
///
/// Loading is all-or-nothing: either every field resolves or the first
/// failure is returned. Nothing is cached between calls, so loading the
/// same unchanged file twice yields equal values.
#[derive(Clone)]
pub struct ConfigLoader {
    fs: Arc<dyn FileSystem>,
    observer: Arc<dyn LoadObserver>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            fs: Arc::new(RealFileSystem),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Read and resolve the document at `path`.
    ///
    /// The caller is expected to have checked that `path` exists; a missing
    /// file surfaces here as an IO error.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Configuration> {
        let path = path.as_ref();
        let contents = self.fs.read(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "read config file");

        let root = parse_document(contents.as_slice())?;
        self.observer.document_loaded(Some(path), root.name());
        self.resolve(&root)
    }

    /// Resolve a document held in memory.
    pub fn load_str(&self, xml: &str) -> Result<Configuration> {
        let root = parse_document(xml.as_bytes())?;
        self.observer.document_loaded(None, root.name());
        self.resolve(&root)
    }

    fn resolve(&self, root: &XmlElement) -> Result<Configuration> {
        let package_name = required_text(root, PACKAGE_NAME)?;
        self.text_resolved(PACKAGE_NAME, &package_name, ValueSource::Document);

        let repository_url = required_text(root, REPOSITORY_URL)?;
        self.text_resolved(REPOSITORY_URL, &repository_url, ValueSource::Document);

        let test_repo_mode = self.flag(root, TEST_REPO_MODE)?;

        let output_file = match optional_text(root, OUTPUT_IMAGE) {
            Some(text) => {
                self.text_resolved(OUTPUT_IMAGE, &text, ValueSource::Document);
                text
            }
            None => {
                self.text_resolved(OUTPUT_IMAGE, DEFAULT_OUTPUT_FILE, ValueSource::Default);
                DEFAULT_OUTPUT_FILE.to_string()
            }
        };

        let ascii_tree_mode = self.flag(root, ASCII_TREE_MODE)?;

        Ok(Configuration {
            package_name,
            repository_url,
            test_repo_mode,
            output_file,
            ascii_tree_mode,
        })
    }

    fn flag(&self, root: &XmlElement, field: &str) -> Result<bool> {
        let (value, source) = match optional_flag(root, field)? {
            Some(value) => (value, ValueSource::Document),
            None => (false, ValueSource::Default),
        };
        self.observer
            .field_resolved(field, &FieldValue::Flag(value), source);
        Ok(value)
    }

    fn text_resolved(&self, field: &str, value: &str, source: ValueSource) {
        self.observer
            .field_resolved(field, &FieldValue::Text(value.to_string()), source);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a configuration file from disk with no observer attached.
pub fn load(path: impl AsRef<Path>) -> Result<Configuration> {
    ConfigLoader::new().load(path)
}

/// Load a configuration from an in-memory XML string.
pub fn load_str(xml: &str) -> Result<Configuration> {
    ConfigLoader::new().load_str(xml)
}
