//! The format-options record shared by the tokenizer diagnostics, the rule
//! engine, and the CLI.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with the comment block at the top of a file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileHeader {
    /// Leave the header alone.
    #[default]
    Ignore,

    /// Replace the header with the given text; an empty string strips it.
    Replace(String),
}

/// Options consumed by the formatter core and its rules.
///
/// The fields named here are the ones the core understands. Anything else a
/// rule author wants to thread through lives in `rule_options`, which the
/// core never interprets; it is an insertion-ordered map so fingerprints
/// derived from the options are stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// The string inserted per indentation level.
    pub indent: String,

    /// The linebreak string used when rules insert new linebreaks.
    pub linebreak: String,

    /// Whether `case` labels are indented one level inside `switch` bodies.
    pub indent_case: bool,

    /// The caller asserts the input is a code fragment, so lexical errors
    /// from dangling tokens do not fail the format call.
    pub fragment: bool,

    /// Suppress merge-conflict-marker detection.
    pub ignore_conflict_markers: bool,

    /// Column width of a tab character; affects only diagnostics.
    pub tab_width: usize,

    /// Treatment of the leading file comment.
    pub file_header: FileHeader,

    /// Swift language version the rules may consult; opaque to the core.
    pub swift_version: Option<String>,

    /// Options for individual rules, passed through uninterpreted.
    pub rule_options: IndexMap<String, String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            linebreak: "\n".to_string(),
            indent_case: false,
            fragment: false,
            ignore_conflict_markers: false,
            tab_width: 4,
            file_header: FileHeader::Ignore,
            swift_version: None,
            rule_options: IndexMap::new(),
        }
    }
}

impl FormatOptions {
    /// Validates invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width < 1 {
            return Err(Error::Options("tab width must be at least 1".to_string()));
        }
        if self.indent.is_empty() {
            return Err(Error::Options("indent must not be empty".to_string()));
        }
        Ok(())
    }
}
