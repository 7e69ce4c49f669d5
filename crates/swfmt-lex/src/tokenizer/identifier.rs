//! Identifier lexing.
//!
//! Covers plain identifiers, `@`-attributes, `#`-directives, and back-quoted
//! names. The reserved directives `#if` and `#endif` are lifted to scope
//! tokens here; every other word is an identifier until the driver decides
//! otherwise.

use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::unicode::{is_identifier_head, is_identifier_tail};

impl<'a> Tokenizer<'a> {
    /// Lexes an identifier-like token.
    ///
    /// Returns `None` if nothing could be matched, which only happens for a
    /// back-quote with no closing partner; the scanner is restored to where
    /// it started in that case.
    pub(crate) fn lex_identifier(&mut self) -> Option<Token> {
        let c = self.scanner.peek()?;
        match c {
            '`' => self.lex_backquoted(),
            '@' | '#' => {
                self.scanner.advance();
                let mut name = c.to_string();
                if let Some(word) = self
                    .scanner
                    .consume_head_tail(is_identifier_head, is_identifier_tail)
                {
                    name.push_str(word);
                }
                let token = if name == "#if" {
                    Token::StartOfScope(name)
                } else if name == "#endif" {
                    Token::EndOfScope(name)
                } else {
                    Token::Identifier(name)
                };
                Some(token)
            }
            _ => {
                let word = self
                    .scanner
                    .consume_head_tail(is_identifier_head, is_identifier_tail)?;
                Some(Token::Identifier(word.to_string()))
            }
        }
    }

    /// Lexes a back-quoted identifier of the form `` `name` ``.
    ///
    /// Restores the checkpoint and returns `None` when the closing
    /// back-quote is missing.
    fn lex_backquoted(&mut self) -> Option<Token> {
        let checkpoint = self.scanner.snapshot();
        self.scanner.advance();
        if let Some(word) = self
            .scanner
            .consume_head_tail(is_identifier_head, is_identifier_tail)
        {
            let word = word.to_string();
            if self.scanner.consume_if_eq('`') {
                return Some(Token::Identifier(format!("`{word}`")));
            }
        }
        self.scanner.restore(checkpoint);
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::tokenize;

    #[test]
    fn test_plain_identifier() {
        assert_eq!(tokenize("foo"), vec![Token::Identifier("foo".into())]);
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(tokenize("foo_2bar"), vec![Token::Identifier("foo_2bar".into())]);
    }

    #[test]
    fn test_dollar_identifier() {
        assert_eq!(tokenize("$0"), vec![Token::Identifier("$0".into())]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(tokenize("переменная"), vec![Token::Identifier("переменная".into())]);
    }

    #[test]
    fn test_attribute() {
        assert_eq!(tokenize("@escaping"), vec![Token::Identifier("@escaping".into())]);
    }

    #[test]
    fn test_directive() {
        assert_eq!(tokenize("#available"), vec![Token::Identifier("#available".into())]);
    }

    #[test]
    fn test_if_directive_is_scope() {
        let tokens = tokenize("#if DEBUG\n#endif");
        assert_eq!(tokens[0], Token::StartOfScope("#if".into()));
        assert_eq!(tokens.last(), Some(&Token::EndOfScope("#endif".into())));
    }

    #[test]
    fn test_backquoted_identifier() {
        assert_eq!(tokenize("`default`"), vec![Token::Identifier("`default`".into())]);
    }

    #[test]
    fn test_unterminated_backquote_is_error() {
        let tokens = tokenize("`default");
        assert_eq!(tokens, vec![Token::Error("`default".into())]);
    }
}
