//! String body lexing.
//!
//! While a `"` scope is open the driver hands control to this sub-lexer. It
//! accumulates body text until an unescaped closing quote, or an unescaped
//! `\(` which suspends the string for an interpolation: the backslash stays
//! at the end of the emitted body slice, a `(` scope opens, and control
//! returns to normal tokenization until the matching `)` re-enters the
//! string.

use crate::token::Token;
use crate::tokenizer::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Lexes string body text up to the next closing quote, interpolation,
    /// or end of input.
    pub(crate) fn lex_string_body(&mut self) {
        let start = self.scanner.position();
        let mut escaped = false;

        while let Some(c) = self.scanner.peek() {
            if !escaped && c == '"' {
                let body = self.scanner.slice_from(start).to_string();
                self.scanner.advance();
                if !body.is_empty() {
                    self.push(Token::StringBody(body));
                }
                self.push(Token::EndOfScope("\"".to_string()));
                return;
            }
            if escaped && c == '(' {
                let body = self.scanner.slice_from(start).to_string();
                if !body.is_empty() {
                    self.push(Token::StringBody(body));
                }
                self.scanner.advance();
                self.push(Token::StartOfScope("(".to_string()));
                return;
            }
            self.scanner.advance();
            escaped = c == '\\' && !escaped;
        }

        // unterminated string: finalization reports the truncation
        let body = self.scanner.slice_from(start).to_string();
        if !body.is_empty() {
            self.push(Token::StringBody(body));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::tokenize;

    fn start(s: &str) -> Token {
        Token::StartOfScope(s.to_string())
    }

    fn end(s: &str) -> Token {
        Token::EndOfScope(s.to_string())
    }

    fn body(s: &str) -> Token {
        Token::StringBody(s.to_string())
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(
            tokenize("\"hello\""),
            vec![start("\""), body("hello"), end("\"")]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(tokenize("\"\""), vec![start("\""), end("\"")]);
    }

    #[test]
    fn test_escaped_quote_stays_in_body() {
        assert_eq!(
            tokenize(r#""a\"b""#),
            vec![start("\""), body(r#"a\"b"#), end("\"")]
        );
    }

    #[test]
    fn test_escaped_backslash_then_quote_closes() {
        assert_eq!(
            tokenize(r#""a\\""#),
            vec![start("\""), body(r"a\\"), end("\"")]
        );
    }

    #[test]
    fn test_interpolation() {
        let tokens = tokenize(r#""x = \(a + b)!""#);
        assert_eq!(
            tokens,
            vec![
                start("\""),
                body(r"x = \"),
                start("("),
                Token::Identifier("a".to_string()),
                Token::Whitespace(" ".to_string()),
                Token::Symbol("+".to_string()),
                Token::Whitespace(" ".to_string()),
                Token::Identifier("b".to_string()),
                end(")"),
                body("!"),
                end("\""),
            ]
        );
    }

    #[test]
    fn test_escaped_backslash_is_not_interpolation() {
        let tokens = tokenize(r#""a\\(b)""#);
        assert_eq!(
            tokens,
            vec![start("\""), body(r"a\\(b)"), end("\"")]
        );
    }

    #[test]
    fn test_nested_interpolation() {
        let tokens = tokenize(r#""\(foo("\(bar)"))""#);
        let opens = tokens.iter().filter(|t| **t == start("\"")).count();
        let closes = tokens.iter().filter(|t| **t == end("\"")).count();
        assert_eq!(opens, 2);
        assert_eq!(closes, 2);
    }

    #[test]
    fn test_unterminated_string_is_truncation_error() {
        let tokens = tokenize("\"abc");
        assert_eq!(
            tokens,
            vec![start("\""), body("abc"), Token::Error(String::new())]
        );
    }

    #[test]
    fn test_string_after_generic_close_demotes_it() {
        let tokens = tokenize("a<b>\"s\"");
        assert!(tokens.contains(&Token::Symbol("<".to_string())));
        assert!(tokens.contains(&Token::Symbol(">".to_string())));
    }
}
