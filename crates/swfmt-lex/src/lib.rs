//! swfmt-lex - Lexical analysis for Swift-style source text.
//!
//! The tokenizer turns raw text into a fully scoped token stream: every
//! delimiter, string, comment, conditional-compilation block, and generic
//! argument list is represented as a matched pair of scope tokens, and each
//! token carries the exact slice of source it came from, so the stream can
//! be serialized back to the original text.
//!
//! Tokenization is total. Malformed input never raises; it surfaces as
//! [`Token::Error`] values in the stream, which the parsing-error scanner in
//! [`diagnostics`] can convert into positioned diagnostics.
//!
//! # Example
//!
//! ```
//! use swfmt_lex::{source_code, tokenize};
//!
//! let source = "let x = 42\n";
//! let tokens = tokenize(source);
//! assert_eq!(source_code(&tokens), source);
//! ```

pub mod diagnostics;
pub mod scanner;
pub mod token;
mod tokenizer;
pub mod unicode;

pub use diagnostics::{offset_for_token, parsing_error, ParsingError};
pub use token::Token;

use tokenizer::Tokenizer;

/// Tokenizes source text into a fully scoped token stream.
///
/// This function is total: any input produces a token stream whose
/// concatenated slices reproduce the input, with malformed stretches
/// represented as [`Token::Error`].
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).run()
}

/// Serializes a token stream back into source text.
pub fn source_code(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.string().len()).sum();
    let mut output = String::with_capacity(capacity);
    for token in tokens {
        output.push_str(token.string());
    }
    output
}
