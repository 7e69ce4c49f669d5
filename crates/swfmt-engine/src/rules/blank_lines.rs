//! Collapses runs of blank lines into a single blank line.

use swfmt_lex::Token;

use crate::formatter::Formatter;
use crate::rules::ScopeTracker;

pub(crate) fn apply(f: &mut Formatter) {
    let mut tracker = ScopeTracker::new();
    let mut linebreaks = 0usize;
    let mut i = 0;
    while i < f.len() {
        let token = f.tokens()[i].clone();
        match &token {
            Token::Linebreak(_) if !tracker.in_comment() => {
                linebreaks += 1;
                if linebreaks > 2 {
                    // drop the extra linebreak along with any indentation
                    // the blank line carried
                    if i > 0 && f.tokens()[i - 1].is_whitespace() {
                        f.remove(i - 1);
                        i -= 1;
                    }
                    f.remove(i);
                    linebreaks -= 1;
                    continue;
                }
            }
            Token::Whitespace(_) => {}
            _ => {
                linebreaks = 0;
            }
        }
        tracker.update(&token);
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::format_default;

    #[test]
    fn test_double_blank_collapsed() {
        assert_eq!(format_default("a()\n\n\n\nb()\n"), "a()\n\nb()\n");
    }

    #[test]
    fn test_single_blank_kept() {
        let source = "a()\n\nb()\n";
        assert_eq!(format_default(source), source);
    }

    #[test]
    fn test_comment_interior_untouched() {
        let source = "/* a\n\n\n b */\n";
        assert_eq!(format_default(source), source);
    }
}
