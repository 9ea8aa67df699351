// src/config/model.rs

use serde::Serialize;

/// Element names recognised as direct children of the document root.
pub const PACKAGE_NAME: &str = "package_name";
pub const REPOSITORY_URL: &str = "repository_url";
pub const TEST_REPO_MODE: &str = "test_repo_mode";
pub const OUTPUT_IMAGE: &str = "output_image";
pub const ASCII_TREE_MODE: &str = "ascii_tree_mode";

/// Image path used when `<output_image>` is absent or blank.
pub const DEFAULT_OUTPUT_FILE: &str = "graph.png";

/// Resolved configuration for the dependency-graph visualizer.
///
/// Mirrors a document like:
///
/// ```xml
/// <config>
///   <package_name>serde</package_name>
///   <repository_url>https://github.com/serde-rs/serde</repository_url>
///   <test_repo_mode>false</test_repo_mode>
///   <output_image>serde.png</output_image>
///   <ascii_tree_mode>yes</ascii_tree_mode>
/// </config>
/// ```
///
/// Values are only ever produced by the loader, which guarantees that
/// `package_name` and `repository_url` are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub package_name: String,
    pub repository_url: String,
    pub test_repo_mode: bool,
    /// Read from `<output_image>`.
    #[serde(rename = "output_image")]
    pub output_file: String,
    pub ascii_tree_mode: bool,
}

impl Configuration {
    /// A configuration with both required fields set and every optional
    /// field at its default.
    pub fn with_required(package_name: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            repository_url: repository_url.into(),
            test_repo_mode: false,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            ascii_tree_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_required_applies_defaults() {
        let cfg = Configuration::with_required("foo", "http://x");
        assert_eq!(cfg.package_name, "foo");
        assert_eq!(cfg.repository_url, "http://x");
        assert!(!cfg.test_repo_mode);
        assert_eq!(cfg.output_file, "graph.png");
        assert!(!cfg.ascii_tree_mode);
    }
}
