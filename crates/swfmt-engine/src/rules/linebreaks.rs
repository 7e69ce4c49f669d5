//! End-of-file linebreak handling.
//!
//! A formatted file ends with exactly one linebreak. Fragments are exempt:
//! a snippet pasted out of the middle of a file should not grow one.

use swfmt_lex::Token;

use crate::formatter::Formatter;

pub(crate) fn end_of_file(f: &mut Formatter) {
    if f.options().fragment {
        return;
    }
    let Some(last_content) = f
        .tokens()
        .iter()
        .rposition(|t| !t.is_whitespace_or_linebreak())
    else {
        return;
    };
    let linebreak = f.options().linebreak.clone();
    let mut tokens = f.tokens()[..=last_content].to_vec();
    tokens.push(Token::Linebreak(linebreak));
    if tokens != f.tokens() {
        f.set_tokens(tokens);
    }
}
