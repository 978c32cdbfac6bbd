// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tag configuration model
//!
//! A configuration is a tagged union keyed on a `"tag"` wire field.
//! Several discriminants share one variant (`h1`..`h6` are all `Heading`,
//! `ul`/`ol` are both `List`, `pre`/`code` are both `Code`), so the serde
//! mapping goes through a flat raw mirror struct rather than serde's
//! internally-tagged enum representation. Unrecognized discriminants are
//! preserved as `Unknown` instead of failing deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error type for the JSON boundary
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Heading level, `h1` through `h6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// The element name for this level
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }
}

/// List flavor, `ul` or `ol`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ul" => Some(Self::Unordered),
            "ol" => Some(Self::Ordered),
            _ => None,
        }
    }
}

/// Code presentation, `pre` (block) or `code` (inline)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    Block,
    Inline,
}

impl CodeKind {
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Block => "pre",
            Self::Inline => "code",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pre" => Some(Self::Block),
            "code" => Some(Self::Inline),
            _ => None,
        }
    }
}

/// A tag configuration: one variant per supported markup shape
///
/// The wire shape is flat, e.g. `{"tag":"a","href":"...","text":"..."}`.
/// Missing fields default (empty string, zero, empty list) rather than
/// error; no validation is performed on field contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTagConfig", into = "RawTagConfig")]
pub enum TagConfig {
    /// Fixed-size grid; `rows`/`cols` bound the output regardless of
    /// `data`'s actual shape
    Table {
        rows: usize,
        cols: usize,
        headers: Option<Vec<String>>,
        data: Option<Vec<Vec<String>>>,
    },
    /// Anchor (`a`)
    Link { href: String, text: String },
    /// `img`, self-closing
    Image { src: String, alt: String },
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    List { kind: ListKind, items: Vec<String> },
    Blockquote { text: String },
    /// `language` is carried for callers but unused by generation
    Code {
        kind: CodeKind,
        code: String,
        language: Option<String>,
    },
    /// Carrier for unrecognized discriminants; generates the empty string
    Unknown { tag: String },
}

impl TagConfig {
    /// The wire discriminant for this configuration
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Table { .. } => "table",
            Self::Link { .. } => "a",
            Self::Image { .. } => "img",
            Self::Heading { level, .. } => level.tag_name(),
            Self::Paragraph { .. } => "p",
            Self::List { kind, .. } => kind.tag_name(),
            Self::Blockquote { .. } => "blockquote",
            Self::Code { kind, .. } => kind.tag_name(),
            Self::Unknown { tag } => tag,
        }
    }

    /// Parse a configuration from its flat JSON wire form
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize a configuration to its flat JSON wire form
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Flat wire shape shared by every variant; `tag` selects which of the
/// other fields are meaningful. `content` and `attributes` belong to the
/// base shape but are unused by generation; they are accepted and dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawTagConfig {
    tag: String,
    #[serde(default, skip_serializing)]
    #[allow(dead_code)]
    content: Option<String>,
    #[serde(default, skip_serializing)]
    #[allow(dead_code)]
    attributes: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cols: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl From<RawTagConfig> for TagConfig {
    fn from(raw: RawTagConfig) -> Self {
        if let Some(level) = HeadingLevel::from_tag(&raw.tag) {
            return Self::Heading {
                level,
                text: raw.text.unwrap_or_default(),
            };
        }
        if let Some(kind) = ListKind::from_tag(&raw.tag) {
            return Self::List {
                kind,
                items: raw.items.unwrap_or_default(),
            };
        }
        if let Some(kind) = CodeKind::from_tag(&raw.tag) {
            return Self::Code {
                kind,
                code: raw.code.unwrap_or_default(),
                language: raw.language,
            };
        }

        match raw.tag.as_str() {
            "table" => Self::Table {
                rows: raw.rows.unwrap_or(0),
                cols: raw.cols.unwrap_or(0),
                headers: raw.headers,
                data: raw.data,
            },
            "a" => Self::Link {
                href: raw.href.unwrap_or_default(),
                text: raw.text.unwrap_or_default(),
            },
            "img" => Self::Image {
                src: raw.src.unwrap_or_default(),
                alt: raw.alt.unwrap_or_default(),
            },
            "p" => Self::Paragraph {
                text: raw.text.unwrap_or_default(),
            },
            "blockquote" => Self::Blockquote {
                text: raw.text.unwrap_or_default(),
            },
            _ => Self::Unknown { tag: raw.tag },
        }
    }
}

impl From<TagConfig> for RawTagConfig {
    fn from(config: TagConfig) -> Self {
        let tag = config.tag_name().to_string();

        match config {
            TagConfig::Table {
                rows,
                cols,
                headers,
                data,
            } => Self {
                tag,
                rows: Some(rows),
                cols: Some(cols),
                headers,
                data,
                ..Default::default()
            },
            TagConfig::Link { href, text } => Self {
                tag,
                href: Some(href),
                text: Some(text),
                ..Default::default()
            },
            TagConfig::Image { src, alt } => Self {
                tag,
                src: Some(src),
                alt: Some(alt),
                ..Default::default()
            },
            TagConfig::Heading { text, .. } => Self {
                tag,
                text: Some(text),
                ..Default::default()
            },
            TagConfig::Paragraph { text } => Self {
                tag,
                text: Some(text),
                ..Default::default()
            },
            TagConfig::List { items, .. } => Self {
                tag,
                items: Some(items),
                ..Default::default()
            },
            TagConfig::Blockquote { text } => Self {
                tag,
                text: Some(text),
                ..Default::default()
            },
            TagConfig::Code { code, language, .. } => Self {
                tag,
                code: Some(code),
                language,
                ..Default::default()
            },
            TagConfig::Unknown { .. } => Self {
                tag,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_from_json() {
        let config = TagConfig::from_json(r#"{"tag":"a","href":"https://x","text":"Go"}"#)
            .unwrap();
        assert_eq!(
            config,
            TagConfig::Link {
                href: "https://x".to_string(),
                text: "Go".to_string(),
            }
        );
    }

    #[test]
    fn test_heading_levels_share_one_variant() {
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            let json = format!(r#"{{"tag":"{}","text":"Title"}}"#, tag);
            let config = TagConfig::from_json(&json).unwrap();
            match config {
                TagConfig::Heading { level, ref text } => {
                    assert_eq!(level.tag_name(), tag);
                    assert_eq!(text, "Title");
                }
                other => panic!("expected heading for {}, got {:?}", tag, other),
            }
        }
    }

    #[test]
    fn test_list_and_code_discriminants() {
        let ul = TagConfig::from_json(r#"{"tag":"ul","items":["a"]}"#).unwrap();
        let ol = TagConfig::from_json(r#"{"tag":"ol","items":["a"]}"#).unwrap();
        assert_eq!(ul.tag_name(), "ul");
        assert_eq!(ol.tag_name(), "ol");

        let pre = TagConfig::from_json(r#"{"tag":"pre","code":"x"}"#).unwrap();
        let code = TagConfig::from_json(r#"{"tag":"code","code":"x"}"#).unwrap();
        assert!(matches!(
            pre,
            TagConfig::Code {
                kind: CodeKind::Block,
                ..
            }
        ));
        assert!(matches!(
            code,
            TagConfig::Code {
                kind: CodeKind::Inline,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_tag_is_preserved_not_rejected() {
        let config = TagConfig::from_json(r#"{"tag":"weird"}"#).unwrap();
        assert_eq!(
            config,
            TagConfig::Unknown {
                tag: "weird".to_string()
            }
        );
    }

    #[test]
    fn test_missing_fields_default_instead_of_error() {
        // No validation on the wire: a link without href/text still parses.
        let config = TagConfig::from_json(r#"{"tag":"a"}"#).unwrap();
        assert_eq!(
            config,
            TagConfig::Link {
                href: String::new(),
                text: String::new(),
            }
        );

        let table = TagConfig::from_json(r#"{"tag":"table"}"#).unwrap();
        assert!(matches!(table, TagConfig::Table { rows: 0, cols: 0, .. }));
    }

    #[test]
    fn test_base_shape_fields_are_accepted_and_dropped() {
        let config = TagConfig::from_json(
            r#"{"tag":"p","text":"hi","content":"ignored","attributes":{"class":"x"}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            TagConfig::Paragraph {
                text: "hi".to_string()
            }
        );
        assert!(!config.to_json().unwrap().contains("attributes"));
    }

    #[test]
    fn test_wire_shape_is_flat_and_tagged() {
        let config = TagConfig::Image {
            src: "i.png".to_string(),
            alt: "pic".to_string(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(json, r#"{"tag":"img","src":"i.png","alt":"pic"}"#);
    }
}
