//! Configuration for the swfmt CLI.
//!
//! Settings live in a `swfmt.toml` discovered next to the formatted files
//! (walking up from the input directory) or named explicitly on the command
//! line. Every field has a default, so an empty or missing file means "use
//! the standard style".

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use swfmt_util::{FileHeader, FormatOptions};

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "swfmt.toml";

/// Configuration as written in `swfmt.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Number of spaces per indentation level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Linebreak style: `lf` or `crlf`.
    #[serde(default = "default_linebreak")]
    pub linebreak: String,

    /// Indent `case` labels inside `switch` bodies.
    #[serde(default)]
    pub indent_case: bool,

    /// Column width of a tab character in diagnostics.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Skip merge-conflict-marker detection.
    #[serde(default)]
    pub ignore_conflict_markers: bool,

    /// Swift language version forwarded to the rules.
    #[serde(default)]
    pub swift_version: Option<String>,

    /// Replacement text for the leading file comment. Absent leaves headers
    /// alone; an empty string strips them.
    #[serde(default)]
    pub file_header: Option<String>,

    /// Per-rule options forwarded uninterpreted.
    #[serde(default)]
    pub rules: IndexMap<String, String>,
}

fn default_indent_width() -> usize {
    4
}

fn default_linebreak() -> String {
    "lf".to_string()
}

fn default_tab_width() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            linebreak: default_linebreak(),
            indent_case: false,
            tab_width: default_tab_width(),
            ignore_conflict_markers: false,
            swift_version: None,
            file_header: None,
            rules: IndexMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Finds the nearest `swfmt.toml` at or above `start`.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut dir = if start.is_dir() {
            start
        } else {
            start.parent()?
        };
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = dir.parent()?;
        }
    }

    /// Maps the configuration onto the core's option record.
    pub fn format_options(&self) -> Result<FormatOptions> {
        let linebreak = match self.linebreak.as_str() {
            "lf" => "\n",
            "crlf" => "\r\n",
            other => {
                return Err(CliError::Config(format!(
                    "unknown linebreak style `{other}` (expected `lf` or `crlf`)"
                )));
            }
        };
        Ok(FormatOptions {
            indent: " ".repeat(self.indent_width),
            linebreak: linebreak.to_string(),
            indent_case: self.indent_case,
            tab_width: self.tab_width,
            ignore_conflict_markers: self.ignore_conflict_markers,
            swift_version: self.swift_version.clone(),
            file_header: match &self.file_header {
                None => FileHeader::Ignore,
                Some(text) => FileHeader::Replace(text.clone()),
            },
            rule_options: self.rules.clone(),
            ..FormatOptions::default()
        })
    }
}
