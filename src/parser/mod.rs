//! Sidebar document loading and emitting
//!
//! Reads JSON, YAML and TOML documents shaped as
//!
//! ```text
//! docs:
//!   - getting-started
//!   - Walkthrough Guides:
//!       - first-feature
//! ```
//!
//! and writes trees back in any of them, preserving order.

pub(crate) mod lower;
pub(crate) mod raw;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::models::SidebarTree;

use raw::RawNode;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    #[default]
    Yaml,
    Toml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> NavResult<Format> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => Err(NavError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// Parse a sidebar document from a string.
///
/// Syntax errors become [`NavError::Parse`]; shape errors become
/// [`NavError::Malformed`] naming the offending entry.
pub fn parse_str(content: &str, format: Format) -> NavResult<SidebarTree> {
    let raw = parse_raw(content, format)?;
    lower::lower_tree(raw)
}

/// Load a sidebar document, inferring the format from the extension.
pub fn load(path: &Path) -> NavResult<SidebarTree> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_str(&content, format)
}

/// Serialize a tree. Ids are plain strings, groups single-key mappings.
pub fn to_string(tree: &SidebarTree, format: Format) -> NavResult<String> {
    let serialize_error = |message: String| NavError::Serialize { format, message };
    match format {
        Format::Json => serde_json::to_string_pretty(tree)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| serialize_error(e.to_string())),
        Format::Yaml => serde_yaml_ng::to_string(tree).map_err(|e| serialize_error(e.to_string())),
        Format::Toml => to_toml(tree).map_err(|e| serialize_error(e.to_string())),
    }
}

/// One `name = [...]` line per sidebar, entries kept inline.
///
/// A sidebar holding only groups would otherwise become a `[[name]]` table
/// array printed after every inline sidebar, changing sidebar order.
fn to_toml(tree: &SidebarTree) -> Result<String, toml::ser::Error> {
    let mut out = String::new();
    for (name, entries) in tree.sidebars() {
        if is_bare_key(name) {
            out.push_str(name);
        } else {
            push_quoted_key(&mut out, name);
        }
        let mut value = String::new();
        entries.serialize(toml::ser::ValueSerializer::new(&mut value))?;
        out.push_str(" = ");
        out.push_str(&value);
        out.push('\n');
    }
    Ok(out)
}

/// Single-line basic string; keys may not use the `"""` form.
fn push_quoted_key(out: &mut String, key: &str) {
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_raw(content: &str, format: Format) -> NavResult<RawNode> {
    let parse_error = |message: String| NavError::Parse { format, message };
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(format_yaml_error(&e)))
        }
        Format::Toml => {
            toml::from_str(content).map_err(|e| parse_error(e.message().trim().to_string()))
        }
    }
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    let err_str = err.to_string();
    let mut message = match err.location() {
        Some(loc) if !err_str.contains("line") => {
            format!("line {}: {}", loc.line(), err_str)
        }
        _ => err_str.clone(),
    };
    if err_str.contains("mapping values are not allowed") {
        message.push_str("\nHint: labels containing ': ' need quotes: - \"Guides: Advanced\":");
    }
    message
}
