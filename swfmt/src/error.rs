//! Error handling for the swfmt CLI.
//!
//! Core formatting errors keep their taxonomy (`reading`, `writing`,
//! `parsing`, `options`); this module wraps them together with the I/O and
//! configuration failures only the CLI can hit.

use thiserror::Error;

/// Errors produced by the CLI layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// A formatting error from the core, passed through unchanged.
    #[error(transparent)]
    Format(#[from] swfmt_util::Error),

    /// File or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The fingerprint cache could not be read or written.
    #[error("cache error: {0}")]
    Cache(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
