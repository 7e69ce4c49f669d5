//! Warnings emitted by rewrite rules.

/// A non-fatal message emitted by a rule while formatting.
///
/// Warnings accumulate in the formatter's sink while a rule runs and are
/// drained by the rule engine after each rule, so a warning always belongs
/// to exactly one rule invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// Human-readable description of the finding.
    pub message: String,

    /// Index of the token the warning refers to, if any.
    pub token_index: Option<usize>,
}

impl Warning {
    /// Creates a warning with no token anchor.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token_index: None,
        }
    }

    /// Creates a warning anchored to a token index.
    pub fn at(message: impl Into<String>, token_index: usize) -> Self {
        Self {
            message: message.into(),
            token_index: Some(token_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_warning() {
        let warning = Warning::at("redundant semicolon", 7);
        assert_eq!(warning.token_index, Some(7));
        assert_eq!(warning.message, "redundant semicolon");
    }
}
