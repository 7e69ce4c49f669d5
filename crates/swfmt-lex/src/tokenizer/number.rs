//! Number literal lexing.
//!
//! The grammar:
//!
//! ```text
//! number := "0x" hex (hex|"_")*  ("p" sign? dec+)?
//!         | "0b" [01] ([01]|"_")*
//!         | "0o" [0-7] ([0-7]|"_")*
//!         | dec (dec|"_")* ("." dec (dec|"_")*)? ([eE] sign? dec (dec|"_")*)?
//! ```
//!
//! Underscores separate digits but never lead. The dot and exponent lookahead
//! use scanner checkpoints so `1.foo` lexes as a number followed by a member
//! access, not a malformed float.

use crate::token::Token;
use crate::tokenizer::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Lexes a number literal; the current character is an ASCII digit.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.scanner.position();

        if self.scanner.peek() == Some('0') {
            match self.scanner.peek_second() {
                Some('x') => return self.lex_radix(start, 16, true),
                Some('b') => return self.lex_radix(start, 2, false),
                Some('o') => return self.lex_radix(start, 8, false),
                _ => {}
            }
        }

        self.scanner.consume_while(|c| c.is_ascii_digit() || c == '_');

        // fractional part: the dot must be followed by a digit
        let checkpoint = self.scanner.snapshot();
        if self.scanner.consume_if_eq('.') {
            if matches!(self.scanner.peek(), Some(c) if c.is_ascii_digit()) {
                self.scanner.consume_while(|c| c.is_ascii_digit() || c == '_');
            } else {
                self.scanner.restore(checkpoint);
            }
        }

        // exponent: e/E, optional sign, at least one digit
        let checkpoint = self.scanner.snapshot();
        if self.scanner.consume_if(|c| c == 'e' || c == 'E').is_some() {
            self.scanner.consume_if(|c| c == '+' || c == '-');
            if matches!(self.scanner.peek(), Some(c) if c.is_ascii_digit()) {
                self.scanner.consume_while(|c| c.is_ascii_digit() || c == '_');
            } else {
                self.scanner.restore(checkpoint);
            }
        }

        Token::Number(self.scanner.slice_from(start).to_string())
    }

    /// Lexes a prefixed integer (`0x`, `0b`, `0o`).
    ///
    /// A prefix with no valid digit after it is malformed; the error token
    /// carries everything through end of input.
    fn lex_radix(&mut self, start: usize, radix: u32, hex_exponent: bool) -> Token {
        self.scanner.advance();
        self.scanner.advance();

        if !matches!(self.scanner.peek(), Some(c) if c.is_digit(radix)) {
            self.scanner.consume_rest();
            return Token::Error(self.scanner.slice_from(start).to_string());
        }
        self.scanner.consume_while(|c| c.is_digit(radix) || c == '_');

        if hex_exponent {
            let checkpoint = self.scanner.snapshot();
            if self.scanner.consume_if_eq('p') {
                self.scanner.consume_if(|c| c == '+' || c == '-');
                if matches!(self.scanner.peek(), Some(c) if c.is_ascii_digit()) {
                    self.scanner.consume_while(|c| c.is_ascii_digit());
                } else {
                    self.scanner.restore(checkpoint);
                }
            }
        }

        Token::Number(self.scanner.slice_from(start).to_string())
    }
}
