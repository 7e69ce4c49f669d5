//! Semicolon cleanup.
//!
//! A semicolon followed only by a linebreak (or end of input) is dead
//! weight and gets removed, with a warning recorded. Inline semicolons
//! separating statements on one line are kept, as are semicolons inside
//! parentheses.

use swfmt_lex::Token;
use swfmt_util::Warning;

use crate::formatter::Formatter;
use crate::rules::ScopeTracker;

pub(crate) fn apply(f: &mut Formatter) {
    let mut tracker = ScopeTracker::new();
    let mut i = 0;
    while i < f.len() {
        let token = f.tokens()[i].clone();
        if matches!(&token, Token::Symbol(s) if s == ";") && tracker.top() != Some("(") {
            let line_terminal = match f.next_non_space(i) {
                None => true,
                Some(next) => f.tokens()[next].is_linebreak(),
            };
            if line_terminal {
                f.warn(Warning::at("redundant semicolon", i));
                f.remove(i);
                continue;
            }
        }
        tracker.update(&token);
        i += 1;
    }
}
