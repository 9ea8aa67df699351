// src/config/validate.rs

//! Field extraction rules and boolean coercion.
//!
//! - Required text: absent, empty or whitespace-only is an error.
//! - Optional flag: absent or empty keeps the default; anything else must be
//!   a boolean token.
//! - Optional text: absent or empty keeps the default; any other text is
//!   trimmed, so whitespace-only text resolves to an empty string.

use std::fmt;

use crate::config::document::XmlElement;
use crate::errors::{ConfigError, Result};

const TRUE_TOKENS: [&str; 3] = ["true", "1", "yes"];
const FALSE_TOKENS: [&str; 3] = ["false", "0", "no"];

/// Text that is not one of the six boolean tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoolError {
    /// The input exactly as given, untrimmed.
    pub value: String,
}

impl fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid boolean value: {}", self.value)
    }
}

impl std::error::Error for ParseBoolError {}

/// Parse a boolean token.
///
/// `None` is `false`. Otherwise the input is trimmed and ASCII-lowercased and
/// must be exactly one of `true`/`1`/`yes` or `false`/`0`/`no`.
pub fn parse_bool(value: Option<&str>) -> std::result::Result<bool, ParseBoolError> {
    let Some(raw) = value else {
        return Ok(false);
    };

    let token = raw.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err(ParseBoolError {
            value: raw.to_string(),
        })
    }
}

fn element_text<'a>(root: &'a XmlElement, field: &str) -> Option<&'a str> {
    root.find_child(field)
        .and_then(XmlElement::text)
        .filter(|text| !text.is_empty())
}

/// Trimmed text of a required child element.
pub fn required_text(root: &XmlElement, field: &str) -> Result<String> {
    match element_text(root, field).map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ConfigError::MissingRequiredField {
            field: field.to_string(),
        }),
    }
}

/// Parsed flag from an optional child element, or `None` to keep the default.
pub fn optional_flag(root: &XmlElement, field: &str) -> Result<Option<bool>> {
    let Some(text) = element_text(root, field) else {
        return Ok(None);
    };

    parse_bool(Some(text))
        .map(Some)
        .map_err(|err| ConfigError::InvalidBooleanValue {
            field: field.to_string(),
            value: err.value,
        })
}

/// Trimmed text of an optional child element, or `None` to keep the default.
pub fn optional_text(root: &XmlElement, field: &str) -> Option<String> {
    element_text(root, field).map(|text| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document::parse_document;

    fn root(src: &str) -> XmlElement {
        parse_document(src.as_bytes()).unwrap()
    }

    #[test]
    fn parse_bool_accepts_all_tokens_in_any_case() {
        for token in ["true", "TRUE", "True", "1", "yes", "YeS", "  yes\n"] {
            assert_eq!(parse_bool(Some(token)), Ok(true), "token {token:?}");
        }
        for token in ["false", "FALSE", "0", "no", "No", "\tfalse "] {
            assert_eq!(parse_bool(Some(token)), Ok(false), "token {token:?}");
        }
    }

    #[test]
    fn parse_bool_none_is_false() {
        assert_eq!(parse_bool(None), Ok(false));
    }

    #[test]
    fn parse_bool_rejects_everything_else_with_raw_input() {
        for token in ["maybe", "", "   ", "t r u e", "2", "on", "y", "-1"] {
            let err = parse_bool(Some(token)).unwrap_err();
            assert_eq!(err.value, token);
        }
    }

    #[test]
    fn parse_bool_error_keeps_untrimmed_value() {
        let err = parse_bool(Some("  maybe ")).unwrap_err();
        assert_eq!(err.value, "  maybe ");
        assert_eq!(err.to_string(), "Invalid boolean value:   maybe ");
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        let r = root("<c><a>  foo \n</a><b>  </b><e/></c>");
        assert_eq!(required_text(&r, "a").unwrap(), "foo");

        for field in ["b", "e", "missing"] {
            match required_text(&r, field) {
                Err(ConfigError::MissingRequiredField { field: f }) => assert_eq!(f, field),
                other => panic!("expected MissingRequiredField for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn optional_flag_defaults_on_absent_or_empty() {
        let r = root("<c><a></a><b/></c>");
        assert_eq!(optional_flag(&r, "a").unwrap(), None);
        assert_eq!(optional_flag(&r, "b").unwrap(), None);
        assert_eq!(optional_flag(&r, "missing").unwrap(), None);
    }

    #[test]
    fn optional_flag_rejects_whitespace_only_text() {
        let r = root("<c><a>  </a></c>");
        match optional_flag(&r, "a") {
            Err(ConfigError::InvalidBooleanValue { field, value }) => {
                assert_eq!(field, "a");
                assert_eq!(value, "  ");
            }
            other => panic!("expected InvalidBooleanValue, got {other:?}"),
        }
    }

    #[test]
    fn optional_text_trims_or_defaults() {
        let r = root("<c><a> out.svg </a><b>   </b><e></e></c>");
        assert_eq!(optional_text(&r, "a").as_deref(), Some("out.svg"));
        assert_eq!(optional_text(&r, "b").as_deref(), Some(""));
        assert_eq!(optional_text(&r, "e"), None);
        assert_eq!(optional_text(&r, "missing"), None);
    }
}
