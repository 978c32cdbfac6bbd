// SPDX-License-Identifier: AGPL-3.0-or-later
//! Taggen Core - Tag configurations and their HTML generator
//!
//! This crate provides:
//! - A tagged-union configuration model whose wire form is keyed on a
//!   `"tag"` discriminant field
//! - A pure `generate` function mapping a configuration to its literal
//!   HTML fragment, with no escaping and no failure mode beyond the
//!   unknown-tag empty string
//! - The supported-tag lookup table for selection UIs

pub mod config;
pub mod generator;
pub mod tags;

pub use config::{CodeKind, ConfigError, HeadingLevel, ListKind, TagConfig};
pub use generator::{generate, generate_json};
pub use tags::{TagOption, HTML_TAGS};
