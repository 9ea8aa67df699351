// src/output.rs

use std::io::{self, Write};

use clap::ValueEnum;

use crate::config::Configuration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `name: value` lines under a heading.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

/// Formats a resolved configuration into any writer.
///
/// Text output lists the fields in a fixed order: package_name,
/// repository_url, test_repo_mode, output_image, ascii_tree_mode. Booleans
/// print as `true`/`false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPrinter {
    format: OutputFormat,
}

impl ConfigPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn write<W: Write>(&self, out: &mut W, cfg: &Configuration) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "Configuration parameters:")?;
                for (name, value) in fields(cfg) {
                    writeln!(out, "  {name}: {value}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, cfg)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn fields(cfg: &Configuration) -> [(&'static str, String); 5] {
    [
        ("package_name", cfg.package_name.clone()),
        ("repository_url", cfg.repository_url.clone()),
        ("test_repo_mode", cfg.test_repo_mode.to_string()),
        ("output_image", cfg.output_file.clone()),
        ("ascii_tree_mode", cfg.ascii_tree_mode.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_to_string(format: OutputFormat, cfg: &Configuration) -> String {
        let mut buf = Vec::new();
        ConfigPrinter::new(format).write(&mut buf, cfg).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_fields_in_fixed_order() {
        let mut cfg = Configuration::with_required("foo", "http://x");
        cfg.ascii_tree_mode = true;

        assert_eq!(
            write_to_string(OutputFormat::Text, &cfg),
            "Configuration parameters:\n\
             \x20 package_name: foo\n\
             \x20 repository_url: http://x\n\
             \x20 test_repo_mode: false\n\
             \x20 output_image: graph.png\n\
             \x20 ascii_tree_mode: true\n"
        );
    }

    #[test]
    fn json_uses_output_image_key() {
        let cfg = Configuration::with_required("foo", "http://x");
        let value: serde_json::Value =
            serde_json::from_str(&write_to_string(OutputFormat::Json, &cfg)).unwrap();

        assert_eq!(value["package_name"], "foo");
        assert_eq!(value["output_image"], "graph.png");
        assert_eq!(value["test_repo_mode"], false);
        assert!(value.get("output_file").is_none());
    }
}
