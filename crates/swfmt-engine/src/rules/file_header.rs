//! File header replacement.
//!
//! When the options carry header text, the leading comment block of the
//! file (everything up to the first blank line or the first code token) is
//! replaced with that text; empty header text strips the block. The engine
//! clamps this rule to ignore mode after the first round, since a header
//! that itself ends in a blank line would otherwise fight the blank-line
//! rules forever.

use swfmt_lex::{tokenize, Token};
use swfmt_util::FileHeader;

use crate::formatter::Formatter;

pub(crate) fn apply(f: &mut Formatter) {
    let header_text = match &f.options().file_header {
        FileHeader::Ignore => return,
        FileHeader::Replace(text) => text.trim_end().to_string(),
    };

    let span = leading_header_span(f.tokens());
    let linebreak = f.options().linebreak.clone();

    let mut replacement = Vec::new();
    if !header_text.is_empty() {
        replacement = tokenize(&header_text);
        replacement.push(Token::Linebreak(linebreak.clone()));
        replacement.push(Token::Linebreak(linebreak));
    }

    if f.tokens()[..span] == replacement[..] {
        return;
    }
    f.remove_range(0..span);
    for token in replacement.into_iter().rev() {
        f.insert(0, token);
    }
}

/// The number of leading tokens that belong to the header: comments and the
/// whitespace/linebreaks between them, ending at the first blank line or
/// the first code token. Returns 0 when the file does not start with a
/// comment.
fn leading_header_span(tokens: &[Token]) -> usize {
    let mut end = 0;
    let mut seen_comment = false;
    let mut linebreak_run = 0usize;
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::StartOfScope(s) if s == "//" || s == "/*" => {
                if seen_comment && linebreak_run >= 2 {
                    break;
                }
                i = skip_comment(tokens, i);
                seen_comment = true;
                linebreak_run = 0;
                end = i;
            }
            Token::Linebreak(_) => {
                linebreak_run += 1;
                i += 1;
                if seen_comment {
                    end = i;
                }
            }
            Token::Whitespace(_) => i += 1,
            _ => break,
        }
    }
    if seen_comment {
        end
    } else {
        0
    }
}

/// Index just past the comment that opens at `start`. For a line comment
/// that is the end of its body; for a block comment, the index after the
/// matching closer.
fn skip_comment(tokens: &[Token], start: usize) -> usize {
    let mut i = start + 1;
    if tokens[start].string() == "//" {
        while matches!(
            tokens.get(i),
            Some(Token::Whitespace(_)) | Some(Token::CommentBody(_))
        ) {
            i += 1;
        }
        return i;
    }
    let mut depth = 1usize;
    while i < tokens.len() && depth > 0 {
        match &tokens[i] {
            Token::StartOfScope(s) if s == "/*" => depth += 1,
            Token::EndOfScope(s) if s == "*/" => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    i
}
