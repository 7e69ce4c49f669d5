//! Error types surfaced to library and CLI callers.

use thiserror::Error;

/// The error taxonomy for formatting operations.
///
/// Every failure a caller can observe falls into one of four kinds, each
/// carrying a human-readable message:
///
/// - `Reading` - input could not be obtained (I/O, encoding)
/// - `Writing` - output could not be produced (rule timeout, non-termination,
///   I/O on write-back)
/// - `Parsing` - the input failed lexical analysis
/// - `Options` - the configuration was invalid
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Failed to read the input.
    #[error("error reading input: {0}")]
    Reading(String),

    /// Failed to produce formatted output.
    #[error("error writing output: {0}")]
    Writing(String),

    /// The input could not be tokenized cleanly.
    #[error("error parsing input: {0}")]
    Parsing(String),

    /// The supplied options were invalid.
    #[error("invalid options: {0}")]
    Options(String),
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_display() {
        let err = Error::Reading("file not found".to_string());
        assert_eq!(err.to_string(), "error reading input: file not found");
    }

    #[test]
    fn test_writing_display() {
        let err = Error::Writing("failed to terminate".to_string());
        assert_eq!(err.to_string(), "error writing output: failed to terminate");
    }

    #[test]
    fn test_parsing_display() {
        let err = Error::Parsing("unexpected token at 3:0".to_string());
        assert_eq!(err.to_string(), "error parsing input: unexpected token at 3:0");
    }

    #[test]
    fn test_options_display() {
        let err = Error::Options("tab width must be at least 1".to_string());
        assert_eq!(err.to_string(), "invalid options: tab width must be at least 1");
    }
}
