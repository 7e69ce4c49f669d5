//! Comment body lexing.
//!
//! Comment interiors are not opaque blobs: words, whitespace runs, and
//! linebreaks come out as separate tokens so rules can re-indent and trim
//! comment lines without parsing the body themselves. Block comments nest;
//! each `/*`/`*/` inside an open comment pushes or pops a scope.

use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::unicode::{is_linebreak, is_space};

impl<'a> Tokenizer<'a> {
    /// Lexes the next piece of an open block comment: a nested opener, a
    /// closer, a linebreak, a whitespace run, or a word.
    pub(crate) fn lex_comment_body(&mut self) {
        let Some(c) = self.scanner.peek() else {
            return;
        };
        if c == '*' && self.scanner.peek_second() == Some('/') {
            self.scanner.advance();
            self.scanner.advance();
            self.push(Token::EndOfScope("*/".to_string()));
            return;
        }
        if c == '/' && self.scanner.peek_second() == Some('*') {
            self.scanner.advance();
            self.scanner.advance();
            self.push(Token::StartOfScope("/*".to_string()));
            return;
        }
        if is_linebreak(c) {
            let token = self.lex_linebreak();
            self.push(token);
            return;
        }
        if is_space(c) {
            let text = self.scanner.consume_while(is_space).to_string();
            self.push(Token::Whitespace(text));
            return;
        }

        let start = self.scanner.position();
        while let Some(c) = self.scanner.peek() {
            if is_space(c) || is_linebreak(c) {
                break;
            }
            if c == '*' && self.scanner.peek_second() == Some('/') {
                break;
            }
            if c == '/' && self.scanner.peek_second() == Some('*') {
                break;
            }
            self.scanner.advance();
        }
        let text = self.scanner.slice_from(start).to_string();
        self.push(Token::CommentBody(text));
    }

    /// Lexes the next piece of an open line comment; the terminating
    /// linebreak goes through the normal path so it closes the scope.
    pub(crate) fn lex_line_comment_body(&mut self) {
        let Some(c) = self.scanner.peek() else {
            return;
        };
        if is_linebreak(c) {
            self.lex_token();
            return;
        }
        if is_space(c) {
            let text = self.scanner.consume_while(is_space).to_string();
            self.push(Token::Whitespace(text));
            return;
        }
        let start = self.scanner.position();
        self.scanner
            .consume_while(|c| !is_space(c) && !is_linebreak(c));
        let text = self.scanner.slice_from(start).to_string();
        self.push(Token::CommentBody(text));
    }
}
