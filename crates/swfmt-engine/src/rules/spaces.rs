//! Whitespace cleanup: consecutive spaces and trailing space.

use swfmt_lex::Token;

use crate::formatter::Formatter;
use crate::rules::ScopeTracker;

/// Collapses runs of spaces into one, outside indentation and comments.
/// Tab-bearing whitespace is left for the indent rule to sort out.
pub(crate) fn collapse_spaces(f: &mut Formatter) {
    let mut tracker = ScopeTracker::new();
    let mut i = 0;
    while i < f.len() {
        let token = f.tokens()[i].clone();
        if token.is_whitespace() {
            let line_leading = i == 0 || f.tokens()[i - 1].is_linebreak();
            let text = token.string();
            if !line_leading
                && !tracker.in_comment()
                && text.len() > 1
                && text.chars().all(|c| c == ' ')
            {
                f.replace(i, Token::Whitespace(" ".to_string()));
            }
        } else {
            tracker.update(&token);
        }
        i += 1;
    }
}

/// Strips whitespace that sits directly before a linebreak or at the end of
/// the buffer.
pub(crate) fn trailing_space(f: &mut Formatter) {
    let mut i = 0;
    while i < f.len() {
        let trailing = f.tokens()[i].is_whitespace()
            && f.tokens().get(i + 1).map_or(true, Token::is_linebreak);
        if trailing {
            f.remove(i);
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::format_default;

    #[test]
    fn test_consecutive_spaces_collapsed() {
        assert_eq!(format_default("let x  =   1\n"), "let x = 1\n");
    }

    #[test]
    fn test_indentation_not_collapsed() {
        let source = "func f() {\n    g()\n}\n";
        assert_eq!(format_default(source), source);
    }

    #[test]
    fn test_comment_alignment_not_collapsed() {
        let source = "// a  table:  x\n";
        assert_eq!(format_default(source), source);
    }

    #[test]
    fn test_trailing_space_stripped() {
        assert_eq!(format_default("let x = 1   \n"), "let x = 1\n");
    }

    #[test]
    fn test_blank_line_indentation_stripped() {
        assert_eq!(format_default("a()\n    \nb()\n"), "a()\n\nb()\n");
    }
}
