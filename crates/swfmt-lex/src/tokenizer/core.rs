//! The tokenizer driver.
//!
//! The driver owns the token buffer while it is being produced. After every
//! raw token is appended it runs `process_token`, which applies the
//! context-sensitive reinterpretations that raw recognition cannot decide on
//! its own: `switch`/`case`/`default` scope promotion, postfix `?`/`!`
//! splitting, angle-bracket generics versus comparison operators, and scope
//! closure. Reinterpretation may rewrite tokens that were already emitted;
//! all such rewrites stay within the current buffer tail or at recorded
//! scope indices.

use crate::scanner::Scanner;
use crate::token::Token;
use crate::unicode::{is_identifier_head, is_linebreak, is_operator_head, is_space};

/// Identifiers that keep a following `case` from being a scope closer.
const CONDITIONAL_KEYWORDS: [&str; 4] = ["if", "guard", "while", "for"];

/// Identifiers that may legitimately follow a closed generic scope.
const GENERIC_FOLLOWERS: [&str; 5] = ["in", "is", "as", "where", "else"];

/// Symbols that may legitimately follow a closed generic scope.
const GENERIC_FOLLOWER_SYMBOLS: [&str; 9] = ["=", "->", ">", ",", ":", ";", "?", "!", "."];

/// Symbols that may occur inside a generic argument list.
const GENERIC_INTERIOR_SYMBOLS: [&str; 6] = [".", ",", ":", "==", "?", "!"];

/// State for one tokenize invocation.
///
/// Every bit of per-call mutable state is an explicit field; all of it is
/// discarded when `run` returns the finished buffer.
pub(crate) struct Tokenizer<'a> {
    /// Cursor over the source text.
    pub(crate) scanner: Scanner<'a>,

    /// The token buffer being produced.
    tokens: Vec<Token>,

    /// Buffer indices of currently-open scope tokens, innermost last.
    scope_stack: Vec<usize>,

    /// Buffer indices of `<` scopes that have been tentatively closed and
    /// may still be demoted to comparison operators.
    closed_generic_scopes: Vec<usize>,

    /// Index of the most recent non-whitespace token.
    last_non_space_index: Option<usize>,

    /// Number of `switch` statements whose bodies are still open.
    nested_switches: usize,

    /// A `case`/`default` label is open and its `:` has not appeared yet.
    awaiting_case_colon: bool,
}

enum LexMode {
    StringBody,
    CommentBody,
    LineComment,
    Normal,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            tokens: Vec::new(),
            scope_stack: Vec::new(),
            closed_generic_scopes: Vec::new(),
            last_non_space_index: None,
            nested_switches: 0,
            awaiting_case_colon: false,
        }
    }

    /// Tokenizes the whole input and returns the finished buffer.
    pub(crate) fn run(mut self) -> Vec<Token> {
        while !self.scanner.is_at_end() {
            let mode = match self.current_scope().map(Token::string) {
                Some("\"") => LexMode::StringBody,
                Some("/*") => LexMode::CommentBody,
                Some("//") => LexMode::LineComment,
                _ => LexMode::Normal,
            };
            match mode {
                LexMode::StringBody => self.lex_string_body(),
                LexMode::CommentBody => self.lex_comment_body(),
                LexMode::LineComment => self.lex_line_comment_body(),
                LexMode::Normal => self.lex_token(),
            }
        }
        self.finalize();
        self.tokens
    }

    /// The innermost open scope token, if any.
    fn current_scope(&self) -> Option<&Token> {
        self.scope_stack.last().map(|&index| &self.tokens[index])
    }

    /// Appends a token and processes it.
    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.process_token();
    }

    /// Lexes one raw token in normal (non-body) mode.
    pub(crate) fn lex_token(&mut self) {
        let Some(c) = self.scanner.peek() else {
            return;
        };
        let token = if is_linebreak(c) {
            self.lex_linebreak()
        } else if is_space(c) {
            let text = self.scanner.consume_while(is_space).to_string();
            Token::Whitespace(text)
        } else if c.is_ascii_digit() {
            self.lex_number()
        } else if c == '`' || c == '#' || c == '@' || is_identifier_head(c) {
            match self.lex_identifier() {
                Some(token) => token,
                // a dangling back-quote can match nothing; the rest of the
                // input becomes one error token
                None => Token::Error(self.scanner.consume_rest().to_string()),
            }
        } else if is_operator_head(c) {
            self.lex_operator()
        } else {
            match c {
                ':' | ';' | ',' => {
                    self.scanner.advance();
                    Token::Symbol(c.to_string())
                }
                '(' | '[' | '{' => {
                    self.scanner.advance();
                    Token::StartOfScope(c.to_string())
                }
                ')' | ']' | '}' => {
                    self.scanner.advance();
                    Token::EndOfScope(c.to_string())
                }
                '"' => {
                    self.scanner.advance();
                    Token::StartOfScope("\"".to_string())
                }
                _ => Token::Error(self.scanner.consume_rest().to_string()),
            }
        };
        self.push(token);
    }

    /// Lexes a linebreak, collapsing a `\r\n` pair into one token.
    pub(crate) fn lex_linebreak(&mut self) -> Token {
        let c = self.scanner.peek().unwrap_or('\n');
        self.scanner.advance();
        if c == '\r' && self.scanner.consume_if_eq('\n') {
            Token::Linebreak("\r\n".to_string())
        } else {
            Token::Linebreak(c.to_string())
        }
    }

    /// Applies the context-sensitive reinterpretations to the token that was
    /// just appended.
    fn process_token(&mut self) {
        let index = self.tokens.len() - 1;

        if self.promote_keyword(index) {
            return;
        }
        if self.split_postfix_operator(index) {
            return;
        }
        self.process_from_generics(index);
    }

    /// The tail of `process_token` that runs again after a generic demotion
    /// or splice, skipping the one-shot keyword and postfix steps.
    fn process_from_generics(&mut self, index: usize) {
        if self.demote_closed_generics(index) {
            return;
        }
        if self.process_scope(index) {
            return;
        }
        if !self.tokens[index].is_whitespace() {
            self.last_non_space_index = Some(index);
        }
    }

    /// The most recent non-whitespace token, if any.
    fn last_non_space(&self) -> Option<&Token> {
        self.last_non_space_index.map(|index| &self.tokens[index])
    }

    /// Promotes `switch`/`case`/`default` identifiers to their scope roles.
    ///
    /// Returns true if the token was rewritten and re-processed.
    fn promote_keyword(&mut self, index: usize) -> bool {
        let name = match &self.tokens[index] {
            Token::Identifier(name) => name.clone(),
            _ => return false,
        };
        match name.as_str() {
            "switch" => {
                // a `.switch` member access is not a statement
                let is_member = matches!(self.last_non_space(), Some(Token::Symbol(s)) if s == ".");
                if !is_member {
                    self.nested_switches += 1;
                }
                false
            }
            "case" | "default" if self.nested_switches > 0 => {
                let keep_identifier = match self.last_non_space() {
                    Some(Token::Symbol(s)) => s == "." || s == ",",
                    Some(Token::Identifier(prev)) => {
                        CONDITIONAL_KEYWORDS.contains(&prev.as_str())
                    }
                    _ => false,
                };
                if keep_identifier {
                    return false;
                }
                self.tokens[index] = Token::EndOfScope(name.clone());
                self.process_token();
                true
            }
            _ => false,
        }
    }

    /// Splits a postfix `?`/`!` off the front of a longer symbol.
    ///
    /// Returns true if the token was split and re-processed.
    fn split_postfix_operator(&mut self, index: usize) -> bool {
        let symbol = match &self.tokens[index] {
            Token::Symbol(s) => s.clone(),
            _ => return false,
        };
        if symbol.len() < 2 || !(symbol.starts_with('?') || symbol.starts_with('!')) {
            return false;
        }
        if index == 0 || self.tokens[index - 1].is_whitespace_or_linebreak() {
            return false;
        }
        let head = &symbol[..1];
        let tail = symbol[1..].to_string();
        self.tokens[index] = Token::Symbol(head.to_string());
        self.last_non_space_index = Some(index);
        let tail_token = if tail == "<" {
            Token::StartOfScope(tail)
        } else {
            Token::Symbol(tail)
        };
        self.push(tail_token);
        true
    }

    /// Demotes tentatively-closed generic scopes when the new token proves
    /// the angle brackets were comparison operators.
    ///
    /// Returns true if a demotion happened and processing was re-entered.
    fn demote_closed_generics(&mut self, index: usize) -> bool {
        let Some(gt_index) = self.last_non_space_index else {
            return false;
        };
        if gt_index >= index {
            return false;
        }
        if !matches!(&self.tokens[gt_index], Token::EndOfScope(s) if s == ">") {
            return false;
        }
        let trigger = match &self.tokens[index] {
            Token::Identifier(name) => !GENERIC_FOLLOWERS.contains(&name.as_str()),
            Token::Symbol(s) => !GENERIC_FOLLOWER_SYMBOLS.contains(&s.as_str()),
            Token::Number(_) => true,
            Token::StartOfScope(s) => s == "\"",
            _ => false,
        };
        if !trigger || self.closed_generic_scopes.is_empty() {
            return false;
        }

        // demote the most recent pair, then walk back through directly
        // preceding `>` closes, each paired with the next recorded `<`
        let mut gt = gt_index;
        loop {
            let Some(lt) = self.closed_generic_scopes.pop() else {
                break;
            };
            self.tokens[lt] = Token::Symbol("<".to_string());
            self.tokens[gt] = Token::Symbol(">".to_string());

            let previous = self.tokens[..gt]
                .iter()
                .rposition(|token| !token.is_whitespace());
            match previous {
                Some(p) if matches!(&self.tokens[p], Token::EndOfScope(s) if s == ">") => gt = p,
                _ => break,
            }
        }

        // a symbol that directly follows the demoted `>` was one operator
        // before the tentative close split it; put it back together
        if index == gt_index + 1 {
            if let Token::Symbol(suffix) = self.tokens[index].clone() {
                let mut joined = String::from(">");
                joined.push_str(&suffix);
                self.tokens[gt_index] = Token::Symbol(joined);
                self.tokens.remove(index);
                let merged = self.tokens.len() - 1;
                self.last_non_space_index = self.tokens[..merged]
                    .iter()
                    .rposition(|token| !token.is_whitespace());
                self.process_from_generics(merged);
                return true;
            }
        }
        self.process_from_generics(index);
        true
    }

    /// True if a bare `<` in this position can open a generic scope.
    fn generic_scope_allowed(&self, index: usize) -> bool {
        if index == 0 {
            return false;
        }
        match &self.tokens[index - 1] {
            Token::Identifier(_) => true,
            // a `?`/`!` split off an optional chain keeps its generic tail
            Token::Symbol(s) => s == "?" || s == "!",
            _ => false,
        }
    }

    /// Handles scope opening, closure, generic aborts, and mismatches for
    /// the token at `index`.
    ///
    /// Returns true if processing was re-entered.
    fn process_scope(&mut self, index: usize) -> bool {
        let token = self.tokens[index].clone();

        if let Token::StartOfScope(s) = &token {
            if s == "<" && !self.generic_scope_allowed(index) {
                self.tokens[index] = Token::Symbol("<".to_string());
                self.process_from_generics(index);
                return true;
            }
            self.closed_generic_scopes.clear();
            self.scope_stack.push(index);
            return false;
        }

        // the `:` that ends a case/default label opens the case body
        if self.awaiting_case_colon {
            if let Token::Symbol(s) = &token {
                if s == ":" && matches!(self.current_scope().map(Token::string), Some("{")) {
                    self.awaiting_case_colon = false;
                    self.tokens[index] = Token::StartOfScope(":".to_string());
                    self.closed_generic_scopes.clear();
                    self.scope_stack.push(index);
                    return false;
                }
            }
        }

        let Some(&scope_index) = self.scope_stack.last() else {
            return self.process_unmatched(index, &token);
        };
        let scope = self.tokens[scope_index].clone();

        if token.closes_scope_for(&scope) {
            match scope.string() {
                "<" => return self.close_generic_scope(index, scope_index, &token),
                ":" => {
                    self.scope_stack.pop();
                    match &token {
                        Token::EndOfScope(s) if s == "}" => {
                            // one `}` ends the case body and the switch
                            self.nested_switches = self.nested_switches.saturating_sub(1);
                            self.awaiting_case_colon = false;
                            if matches!(self.current_scope().map(Token::string), Some("{")) {
                                self.scope_stack.pop();
                            }
                        }
                        _ => {
                            // `case` or `default`: a new label begins
                            self.awaiting_case_colon = true;
                        }
                    }
                    return false;
                }
                _ => {
                    self.scope_stack.pop();
                    return false;
                }
            }
        }

        if scope.string() == "<" {
            return self.process_inside_generic(index, scope_index, &token);
        }

        self.process_unmatched(index, &token)
    }

    /// A symbol beginning with `>` tentatively closes a generic scope; any
    /// trailing operator characters are re-emitted as their own symbol.
    fn close_generic_scope(&mut self, index: usize, scope_index: usize, token: &Token) -> bool {
        self.scope_stack.pop();
        self.closed_generic_scopes.push(scope_index);
        let symbol = token.string().to_string();
        self.tokens[index] = Token::EndOfScope(">".to_string());
        if symbol.len() > 1 {
            self.last_non_space_index = Some(index);
            self.push(Token::Symbol(symbol[1..].to_string()));
            return true;
        }
        false
    }

    /// Tokens that cannot occur in a type argument list demote the open `<`
    /// back to a comparison operator.
    fn process_inside_generic(&mut self, index: usize, scope_index: usize, token: &Token) -> bool {
        let abort = match token {
            Token::Symbol(s) => {
                if s.starts_with("?>") || s.starts_with("!>") {
                    // a postfix operator fused to the closing angle; split it
                    // so the `>` can close the scope
                    let tail = s[1..].to_string();
                    self.tokens[index] = Token::Symbol(s[..1].to_string());
                    self.last_non_space_index = Some(index);
                    self.push(Token::Symbol(tail));
                    return true;
                }
                !GENERIC_INTERIOR_SYMBOLS.contains(&s.as_str())
            }
            Token::EndOfScope(_) => true,
            _ => false,
        };
        if abort {
            self.scope_stack.pop();
            self.tokens[scope_index] = Token::Symbol("<".to_string());
            self.process_from_generics(index);
            return true;
        }
        false
    }

    /// A scope closer that matches nothing becomes an error token; a
    /// promoted `case`/`default` that closes nothing still begins a label.
    fn process_unmatched(&mut self, index: usize, token: &Token) -> bool {
        if let Token::EndOfScope(s) = token {
            if s == "case" || s == "default" {
                self.awaiting_case_colon = true;
            } else {
                self.tokens[index] = Token::Error(s.clone());
            }
        }
        false
    }

    /// Resolves scopes still open at end of input.
    ///
    /// An unclosed `<` was a comparison after all; an unclosed line comment
    /// is complete. Any other unclosed scope marks the input as truncated.
    fn finalize(&mut self) {
        let mut truncated = false;
        while let Some(scope_index) = self.scope_stack.pop() {
            match self.tokens[scope_index].string() {
                "<" => {
                    self.tokens[scope_index] = Token::Symbol("<".to_string());
                }
                "//" => {}
                _ => truncated = true,
            }
        }
        if truncated && !matches!(self.tokens.last(), Some(Token::Error(_))) {
            self.tokens.push(Token::Error(String::new()));
        }
    }
}
