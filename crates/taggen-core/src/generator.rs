// SPDX-License-Identifier: AGPL-3.0-or-later
//! HTML generation from tag configurations
//!
//! One formatting routine per tag family, selected by the configuration's
//! discriminant. Interpolated text passes through verbatim: no HTML
//! escaping is performed anywhere, by contract.

use crate::config::{CodeKind, ConfigError, HeadingLevel, ListKind, TagConfig};
use tracing::{trace, warn};

/// Generate the HTML fragment for a configuration.
///
/// Pure and total: output depends only on the input, and every
/// configuration produces a string. Unrecognized discriminants resolve to
/// the empty string rather than an error.
pub fn generate(config: &TagConfig) -> String {
    trace!(tag = config.tag_name(), "generating html fragment");

    match config {
        TagConfig::Table {
            rows,
            cols,
            headers,
            data,
        } => generate_table(*rows, *cols, headers.as_deref(), data.as_deref()),
        TagConfig::Link { href, text } => format!("<a href=\"{}\">{}</a>", href, text),
        TagConfig::Image { src, alt } => format!("<img src=\"{}\" alt=\"{}\" />", src, alt),
        TagConfig::Heading { level, text } => generate_heading(*level, text),
        TagConfig::Paragraph { text } => format!("<p>{}</p>", text),
        TagConfig::List { kind, items } => generate_list(*kind, items),
        TagConfig::Blockquote { text } => format!("<blockquote>{}</blockquote>", text),
        TagConfig::Code { kind, code, .. } => generate_code(*kind, code),
        TagConfig::Unknown { tag } => {
            warn!(tag = %tag, "unrecognized tag, emitting empty string");
            String::new()
        }
    }
}

/// Deserialize a flat JSON configuration and generate its HTML fragment.
pub fn generate_json(json: &str) -> Result<String, ConfigError> {
    let config = TagConfig::from_json(json)?;
    Ok(generate(&config))
}

fn generate_table(
    rows: usize,
    cols: usize,
    headers: Option<&[String]>,
    data: Option<&[Vec<String>]>,
) -> String {
    let mut html = String::from("<table>\n");

    if let Some(headers) = headers.filter(|h| !h.is_empty()) {
        html.push_str("  <thead>\n    <tr>\n");
        for header in headers {
            // Empty header text falls back to a literal placeholder.
            let text = if header.is_empty() { "Header" } else { header };
            html.push_str(&format!("      <th>{}</th>\n", text));
        }
        html.push_str("    </tr>\n  </thead>\n");
    }

    html.push_str("  <tbody>\n");
    for i in 0..rows {
        html.push_str("    <tr>\n");
        for j in 0..cols {
            // rows/cols bound the grid regardless of data's shape; a
            // missing row, missing column, or empty string all fall back
            // to the 1-based placeholder.
            let cell = data
                .and_then(|d| d.get(i))
                .and_then(|row| row.get(j))
                .filter(|s| !s.is_empty());
            match cell {
                Some(text) => html.push_str(&format!("      <td>{}</td>\n", text)),
                None => html.push_str(&format!("      <td>Cell {},{}</td>\n", i + 1, j + 1)),
            }
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");

    html
}

fn generate_heading(level: HeadingLevel, text: &str) -> String {
    let tag = level.tag_name();
    format!("<{}>{}</{}>", tag, text, tag)
}

fn generate_list(kind: ListKind, items: &[String]) -> String {
    let tag = kind.tag_name();
    let mut html = format!("<{}>\n", tag);
    for item in items {
        html.push_str(&format!("  <li>{}</li>\n", item));
    }
    html.push_str(&format!("</{}>", tag));
    html
}

fn generate_code(kind: CodeKind, code: &str) -> String {
    match kind {
        CodeKind::Block => format!("<pre><code>{}</code></pre>", code),
        CodeKind::Inline => format!("<code>{}</code>", code),
    }
}
