#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Builder for configuration XML documents to simplify test setup.
///
/// Elements are emitted in the order they were added, so duplicates and
/// unusual orderings can be expressed directly.
pub struct ConfigXmlBuilder {
    root: String,
    elements: Vec<(String, Option<String>)>,
}

impl ConfigXmlBuilder {
    pub fn new() -> Self {
        Self {
            root: "config".to_string(),
            elements: Vec::new(),
        }
    }

    /// Starts with both required fields set.
    pub fn minimal(package_name: &str, repository_url: &str) -> Self {
        Self::new()
            .element("package_name", package_name)
            .element("repository_url", repository_url)
    }

    pub fn root(mut self, tag: &str) -> Self {
        self.root = tag.to_string();
        self
    }

    /// `<tag>text</tag>`; `text` is written verbatim (no escaping).
    pub fn element(mut self, tag: &str, text: &str) -> Self {
        self.elements.push((tag.to_string(), Some(text.to_string())));
        self
    }

    /// `<tag/>`
    pub fn empty_element(mut self, tag: &str) -> Self {
        self.elements.push((tag.to_string(), None));
        self
    }

    pub fn test_repo_mode(self, text: &str) -> Self {
        self.element("test_repo_mode", text)
    }

    pub fn output_image(self, text: &str) -> Self {
        self.element("output_image", text)
    }

    pub fn ascii_tree_mode(self, text: &str) -> Self {
        self.element("ascii_tree_mode", text)
    }

    pub fn build(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<{}>\n", self.root));
        for (tag, text) in &self.elements {
            match text {
                Some(text) => xml.push_str(&format!("  <{tag}>{text}</{tag}>\n")),
                None => xml.push_str(&format!("  <{tag}/>\n")),
            }
        }
        xml.push_str(&format!("</{}>\n", self.root));
        xml
    }

    /// Write the document to a fresh temporary `.xml` file.
    pub fn write_temp(&self) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".xml")
            .tempfile()
            .expect("create temp config file");
        file.write_all(self.build().as_bytes())
            .expect("write temp config file");
        file
    }
}

impl Default for ConfigXmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
