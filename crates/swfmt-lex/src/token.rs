//! The token model.
//!
//! Every token carries the exact source slice it was produced from, so the
//! concatenation of all token strings reproduces the input. Scope tokens
//! additionally carry scope semantics: a `StartOfScope` opens a delimited
//! region that a matching `EndOfScope` closes, with the pairing defined by
//! `closes_scope_for`.

/// A lexical unit of source code.
///
/// The discriminant classifies the token; the carried `String` is the exact
/// source slice. Equality is structural over both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A numeric literal, e.g. `42`, `0xFF`, `3.14e-2`.
    Number(String),

    /// An identifier, keyword, attribute, directive, or back-quoted name.
    Identifier(String),

    /// An operator or punctuation mark, e.g. `+`, `->`, `,`.
    Symbol(String),

    /// A run of literal text inside a string scope.
    StringBody(String),

    /// A run of text inside a comment scope.
    CommentBody(String),

    /// Intra-line whitespace.
    Whitespace(String),

    /// A linebreak: `\n`, `\r`, or the `\r\n` pair as one token.
    Linebreak(String),

    /// Opens a scope: one of `(`, `[`, `{`, `"`, `/*`, `//`, `#if`, `<`, `:`.
    StartOfScope(String),

    /// Closes a scope: one of `)`, `]`, `}`, `"`, `*/`, `#endif`, `>`,
    /// `case`, `default`.
    EndOfScope(String),

    /// Malformed input, carrying the offending text (possibly empty for a
    /// truncated scope at end of input).
    Error(String),
}

impl Token {
    /// The exact source slice this token was produced from.
    pub fn string(&self) -> &str {
        match self {
            Token::Number(s)
            | Token::Identifier(s)
            | Token::Symbol(s)
            | Token::StringBody(s)
            | Token::CommentBody(s)
            | Token::Whitespace(s)
            | Token::Linebreak(s)
            | Token::StartOfScope(s)
            | Token::EndOfScope(s)
            | Token::Error(s) => s,
        }
    }

    /// True for intra-line whitespace.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// True for linebreak tokens.
    pub fn is_linebreak(&self) -> bool {
        matches!(self, Token::Linebreak(_))
    }

    /// True for whitespace or linebreak tokens.
    pub fn is_whitespace_or_linebreak(&self) -> bool {
        self.is_whitespace() || self.is_linebreak()
    }

    /// True for tokens that form part of a comment: the opening and closing
    /// delimiters and the body text.
    pub fn is_comment(&self) -> bool {
        match self {
            Token::CommentBody(_) => true,
            Token::StartOfScope(s) => s == "//" || s == "/*",
            Token::EndOfScope(s) => s == "*/",
            _ => false,
        }
    }

    /// True for whitespace or comment tokens.
    pub fn is_whitespace_or_comment(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    /// True for whitespace, comment, or linebreak tokens.
    pub fn is_whitespace_or_comment_or_linebreak(&self) -> bool {
        self.is_whitespace_or_comment() || self.is_linebreak()
    }

    /// True for error tokens.
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }

    /// True for identifiers.
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// True for scope openers.
    pub fn is_start_of_scope(&self) -> bool {
        matches!(self, Token::StartOfScope(_))
    }

    /// True for scope closers.
    pub fn is_end_of_scope(&self) -> bool {
        matches!(self, Token::EndOfScope(_))
    }

    /// Returns true if this token closes the given scope opener.
    ///
    /// The pairing table:
    ///
    /// | opener  | accepted closers                  |
    /// |---------|-----------------------------------|
    /// | `(`     | `)`                               |
    /// | `[`     | `]`                               |
    /// | `{`     | `}`                               |
    /// | `:`     | `}`, `case`, `default`            |
    /// | `/*`    | `*/`                              |
    /// | `#if`   | `#endif`                          |
    /// | `"`     | `"`                               |
    /// | `<`     | any symbol beginning with `>`     |
    /// | `//`    | any linebreak                     |
    pub fn closes_scope_for(&self, scope: &Token) -> bool {
        let Token::StartOfScope(opener) = scope else {
            return false;
        };
        match (opener.as_str(), self) {
            ("(", Token::EndOfScope(s)) => s == ")",
            ("[", Token::EndOfScope(s)) => s == "]",
            ("{", Token::EndOfScope(s)) => s == "}",
            (":", Token::EndOfScope(s)) => s == "}" || s == "case" || s == "default",
            ("/*", Token::EndOfScope(s)) => s == "*/",
            ("#if", Token::EndOfScope(s)) => s == "#endif",
            ("\"", Token::EndOfScope(s)) => s == "\"",
            ("<", Token::Symbol(s)) | ("<", Token::EndOfScope(s)) => s.starts_with('>'),
            ("//", Token::Linebreak(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(s: &str) -> Token {
        Token::StartOfScope(s.to_string())
    }

    fn end(s: &str) -> Token {
        Token::EndOfScope(s.to_string())
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Token::Identifier("foo".into()), Token::Identifier("foo".into()));
        assert_ne!(Token::Identifier("foo".into()), Token::Symbol("foo".into()));
        assert_ne!(Token::Number("1".into()), Token::Number("2".into()));
    }

    #[test]
    fn test_string_accessor() {
        assert_eq!(Token::Linebreak("\r\n".into()).string(), "\r\n");
        assert_eq!(start("#if").string(), "#if");
    }

    #[test]
    fn test_whitespace_predicates() {
        let space = Token::Whitespace(" ".into());
        let linebreak = Token::Linebreak("\n".into());
        assert!(space.is_whitespace());
        assert!(!linebreak.is_whitespace());
        assert!(linebreak.is_whitespace_or_linebreak());
        assert!(space.is_whitespace_or_comment());
    }

    #[test]
    fn test_comment_predicates() {
        assert!(start("//").is_comment());
        assert!(start("/*").is_comment());
        assert!(end("*/").is_comment());
        assert!(Token::CommentBody("hi".into()).is_comment());
        assert!(!start("{").is_comment());
    }

    #[test]
    fn test_simple_pairings() {
        assert!(end(")").closes_scope_for(&start("(")));
        assert!(end("]").closes_scope_for(&start("[")));
        assert!(end("}").closes_scope_for(&start("{")));
        assert!(end("*/").closes_scope_for(&start("/*")));
        assert!(end("#endif").closes_scope_for(&start("#if")));
        assert!(end("\"").closes_scope_for(&start("\"")));
        assert!(!end(")").closes_scope_for(&start("[")));
    }

    #[test]
    fn test_case_body_pairings() {
        assert!(end("}").closes_scope_for(&start(":")));
        assert!(end("case").closes_scope_for(&start(":")));
        assert!(end("default").closes_scope_for(&start(":")));
        assert!(!end(")").closes_scope_for(&start(":")));
    }

    #[test]
    fn test_generic_pairings() {
        assert!(Token::Symbol(">".into()).closes_scope_for(&start("<")));
        assert!(Token::Symbol(">>".into()).closes_scope_for(&start("<")));
        assert!(Token::Symbol(">=".into()).closes_scope_for(&start("<")));
        assert!(!Token::Symbol("=>".into()).closes_scope_for(&start("<")));
    }

    #[test]
    fn test_line_comment_closed_by_any_linebreak() {
        assert!(Token::Linebreak("\n".into()).closes_scope_for(&start("//")));
        assert!(Token::Linebreak("\r\n".into()).closes_scope_for(&start("//")));
        assert!(!Token::Whitespace(" ".into()).closes_scope_for(&start("//")));
    }
}
