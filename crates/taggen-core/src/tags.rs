// SPDX-License-Identifier: AGPL-3.0-or-later
//! Supported-tag table for caller selection UIs
//!
//! A pass-through constant, not generated data. Note `h4`..`h6` generate
//! fine but are not offered here.

use serde::Serialize;

/// One selectable entry: wire discriminant plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Supported tags in presentation order
pub const HTML_TAGS: [TagOption; 12] = [
    TagOption { value: "table", label: "Table" },
    TagOption { value: "a", label: "Link" },
    TagOption { value: "img", label: "Image" },
    TagOption { value: "h1", label: "Heading 1" },
    TagOption { value: "h2", label: "Heading 2" },
    TagOption { value: "h3", label: "Heading 3" },
    TagOption { value: "p", label: "Paragraph" },
    TagOption { value: "ul", label: "Unordered List" },
    TagOption { value: "ol", label: "Ordered List" },
    TagOption { value: "blockquote", label: "Blockquote" },
    TagOption { value: "pre", label: "Code Block" },
    TagOption { value: "code", label: "Inline Code" },
];
