//! The parsing-error scanner.
//!
//! Tokenization itself is total; this post-pass walks a finished buffer and
//! turns the first lexical error or merge-conflict marker into a diagnostic
//! with a line/column position.

use std::fmt;

use swfmt_util::{FormatOptions, SourceLocation};

use crate::token::Token;

/// Prefixes a merge conflict leaves behind, long enough not to collide with
/// real operators.
const CONFLICT_MARKERS: [&str; 3] = ["<<<<<", "=====", ">>>>>"];

/// A diagnostic produced by scanning a token buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsingError {
    /// Human-readable description.
    pub message: String,

    /// Position of the offending token in the original source.
    pub location: SourceLocation,
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Computes the source position of the token at `index`.
///
/// Lines start at 1 and columns at 0. Linebreak tokens advance the line and
/// reset the column; whitespace, string bodies, and comment bodies advance
/// the column by codepoint count with tabs expanded to `tab_width`; every
/// other token advances the column by its codepoint length.
pub fn offset_for_token(index: usize, tokens: &[Token], tab_width: usize) -> SourceLocation {
    let mut line = 1;
    let mut column = 0;
    for token in tokens.iter().take(index) {
        match token {
            Token::Linebreak(_) => {
                line += 1;
                column = 0;
            }
            Token::Whitespace(text) | Token::StringBody(text) | Token::CommentBody(text) => {
                for c in text.chars() {
                    column += if c == '\t' { tab_width } else { 1 };
                }
            }
            other => column += other.string().chars().count(),
        }
    }
    SourceLocation::new(line, column)
}

/// Returns the first diagnostic in the buffer, if any.
///
/// Error tokens are reported unless the caller marked the input as a
/// fragment; conflict markers are reported unless suppressed by the
/// options.
pub fn parsing_error(tokens: &[Token], options: &FormatOptions) -> Option<ParsingError> {
    for (index, token) in tokens.iter().enumerate() {
        let message = match token {
            Token::Error(text) if !options.fragment => {
                if text.is_empty() {
                    "unexpected end of input".to_string()
                } else {
                    format!("unexpected token `{}`", excerpt(text))
                }
            }
            Token::Symbol(text)
                if !options.ignore_conflict_markers
                    && CONFLICT_MARKERS.iter().any(|m| text.starts_with(m)) =>
            {
                format!("found conflict marker `{}`", excerpt(text))
            }
            _ => continue,
        };
        return Some(ParsingError {
            message,
            location: offset_for_token(index, tokens, options.tab_width),
        });
    }
    None
}

/// The first line of the offending text, truncated for readability.
fn excerpt(text: &str) -> &str {
    let line = text.lines().next().unwrap_or(text);
    match line.char_indices().nth(20) {
        Some((byte, _)) => &line[..byte],
        None => line,
    }
}
