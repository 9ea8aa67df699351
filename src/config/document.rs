// src/config/document.rs

//! Minimal element tree over `xml-rs` events.
//!
//! Only what configuration lookup needs is kept: element names, the text
//! that precedes an element's first child, and child elements. Attributes,
//! comments and processing instructions are dropped.
//!
//! Child lookup is a single-match rule: [`XmlElement::find_child`] returns
//! the first matching direct child in document order. Duplicate elements are
//! never merged.

use std::io::Read;

use xml::common::Position;
use xml::reader::{EventReader, XmlEvent};

use crate::errors::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    namespace: Option<String>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String, namespace: Option<String>) -> Self {
        Self {
            name,
            namespace,
            text: None,
            children: Vec::new(),
        }
    }

    /// Local tag name (without prefix).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Character data appearing before the first child element, entities
    /// decoded. `None` when the element has no such text (e.g. `<a/>`).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child named `tag` with no namespace, in document order.
    pub fn find_child(&self, tag: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|child| child.namespace.is_none() && child.name == tag)
    }

    fn push_text(&mut self, chunk: &str) {
        // Text after a child element is that child's tail, not ours.
        if !self.children.is_empty() {
            return;
        }
        self.text.get_or_insert_with(String::new).push_str(chunk);
    }
}

/// Parse a complete document and return its root element.
///
/// Any well-formedness violation (unclosed or mismatched tags, no root,
/// content after the root) is reported as [`ConfigError::XmlSyntax`].
pub fn parse_document<R: Read>(source: R) -> Result<XmlElement> {
    let mut reader = EventReader::new(source);

    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.next()? {
            XmlEvent::StartElement { name, .. } => {
                if root.is_some() {
                    return Err(syntax_error(&reader, "element found after the root element"));
                }
                open.push(XmlElement::new(name.local_name, name.namespace));
            }
            XmlEvent::EndElement { .. } => {
                let Some(finished) = open.pop() else {
                    return Err(syntax_error(&reader, "end tag without matching start tag"));
                };
                match open.last_mut() {
                    Some(parent) => parent.children.push(finished),
                    None => root = Some(finished),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) => match open.last_mut() {
                Some(current) => current.push_text(&text),
                None => {
                    return Err(syntax_error(&reader, "text found outside the root element"));
                }
            },
            XmlEvent::Whitespace(text) => {
                if let Some(current) = open.last_mut() {
                    current.push_text(&text);
                }
            }
            XmlEvent::EndDocument => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(syntax_error(&reader, "document ended with unclosed elements"));
    }

    root.ok_or_else(|| syntax_error(&reader, "no root element found"))
}

// xml-rs rejects most of these itself; the checks keep the tree builder
// sound regardless of parser version.
fn syntax_error<R: Read>(reader: &EventReader<R>, message: &str) -> ConfigError {
    let pos = reader.position();
    ConfigError::XmlSyntax {
        row: pos.row + 1,
        column: pos.column + 1,
        message: message.to_string(),
    }
}
