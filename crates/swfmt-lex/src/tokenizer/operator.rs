//! Operator lexing.
//!
//! Operators use maximal munch over the operator character tables, with two
//! carve-outs: a dot may only continue a dot-headed operator, and the
//! comment openers `//` and `/*` terminate an operator in progress (or, at
//! the head position, become comment scope tokens themselves). A bare `<`
//! is emitted as a tentative scope opener; the driver finalizes its
//! classification.

use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::unicode::{is_operator_head, is_operator_tail};

impl<'a> Tokenizer<'a> {
    /// Lexes an operator or a comment opener.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let start = self.scanner.position();
        let head_is_dot = self.scanner.peek() == Some('.');

        loop {
            let Some(c) = self.scanner.peek() else {
                break;
            };
            if c == '/' {
                if let Some('*') | Some('/') = self.scanner.peek_second() {
                    if self.scanner.position() == start {
                        let block = self.scanner.peek_second() == Some('*');
                        self.scanner.advance();
                        self.scanner.advance();
                        let opener = if block { "/*" } else { "//" };
                        return Token::StartOfScope(opener.to_string());
                    }
                    // leave the comment opener for the next call
                    break;
                }
            }
            if c == '.' && !head_is_dot {
                break;
            }
            let accepted = if self.scanner.position() == start {
                is_operator_head(c)
            } else {
                is_operator_tail(c)
            };
            if !accepted {
                break;
            }
            self.scanner.advance();
        }

        let text = self.scanner.slice_from(start);
        if text == "<" {
            Token::StartOfScope("<".to_string())
        } else {
            Token::Symbol(text.to_string())
        }
    }
}
