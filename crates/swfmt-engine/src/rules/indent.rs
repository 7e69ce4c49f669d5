//! Line indentation.
//!
//! Rewrites the whitespace at the start of every line from the stack of
//! scopes open at that point. Braces, parentheses, brackets, generic
//! argument lists, and conditional-compilation blocks indent their contents
//! one level; `case` bodies indent per the `indent_case` option, with the
//! labels themselves sitting at the `switch` level by default. Lines that
//! begin with a scope closer are outdented to the level of the line that
//! opened the scope. Block-comment interiors and blank lines keep whatever
//! alignment they had.

use swfmt_lex::Token;

use crate::formatter::Formatter;
use crate::rules::ScopeTracker;

pub(crate) fn apply(f: &mut Formatter) {
    let unit = f.options().indent.clone();
    let indent_case = f.options().indent_case;
    let tokens = f.tokens().to_vec();
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut tracker = ScopeTracker::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if !token.is_linebreak() {
            tracker.update(token);
            out.push(token.clone());
            i += 1;
            continue;
        }

        tracker.update(token);
        out.push(token.clone());
        i += 1;

        let had_leading = matches!(tokens.get(i), Some(Token::Whitespace(_)));
        let mut next = i;
        while matches!(tokens.get(next), Some(t) if t.is_whitespace()) {
            next += 1;
        }

        let keep_original = tracker.in_comment()
            || matches!(tokens.get(next), None | Some(Token::Linebreak(_)));
        if keep_original {
            if had_leading {
                out.push(tokens[i].clone());
            }
        } else {
            let level = line_level(&tracker, &tokens[next], indent_case);
            if level > 0 {
                out.push(Token::Whitespace(unit.repeat(level)));
            }
        }
        if had_leading {
            i += 1;
        }
    }

    f.set_tokens(out);
}

/// The indentation level for a line whose first token is `first`, given the
/// scopes open where the line begins.
fn line_level(tracker: &ScopeTracker, first: &Token, indent_case: bool) -> usize {
    let mut sim = tracker.clone();
    if first.is_end_of_scope() {
        sim.update(first);
    }
    let mut level: isize = sim
        .stack()
        .iter()
        .map(|scope| contribution(scope, indent_case))
        .sum();
    if !indent_case {
        if let Token::EndOfScope(s) = first {
            if s == "case" || s == "default" {
                level -= 1;
            }
        }
    }
    level.max(0) as usize
}

fn contribution(scope: &str, indent_case: bool) -> isize {
    match scope {
        "{" | "(" | "[" | "#if" | "<" => 1,
        ":" => isize::from(indent_case),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use swfmt_util::FormatOptions;

    use crate::tests_support::{format_default, format_with};

    #[test]
    fn test_block_indentation() {
        assert_eq!(
            format_default("func f() {\nif x {\ng()\n}\n}\n"),
            "func f() {\n    if x {\n        g()\n    }\n}\n"
        );
    }

    #[test]
    fn test_wrapped_call_arguments() {
        assert_eq!(
            format_default("f(\na,\nb\n)\n"),
            "f(\n    a,\n    b\n)\n"
        );
    }

    #[test]
    fn test_switch_cases_at_switch_level() {
        assert_eq!(
            format_default("switch x {\ncase 1:\nbreak\ndefault:\nbreak\n}\n"),
            "switch x {\ncase 1:\n    break\ndefault:\n    break\n}\n"
        );
    }

    #[test]
    fn test_indent_case_option() {
        let options = FormatOptions {
            indent_case: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_with("switch x {\ncase 1:\nbreak\n}\n", &options),
            "switch x {\n    case 1:\n        break\n}\n"
        );
    }

    #[test]
    fn test_two_space_indent() {
        let options = FormatOptions {
            indent: "  ".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(
            format_with("func f() {\ng()\n}\n", &options),
            "func f() {\n  g()\n}\n"
        );
    }

    #[test]
    fn test_conditional_compilation_indented() {
        assert_eq!(
            format_default("#if DEBUG\nlog()\n#endif\n"),
            "#if DEBUG\n    log()\n#endif\n"
        );
    }

    #[test]
    fn test_block_comment_interior_untouched() {
        let source = "/*\n   aligned\n     deeper\n */\n";
        assert_eq!(format_default(source), source);
    }

    #[test]
    fn test_over_indented_code_is_pulled_back() {
        assert_eq!(
            format_default("func f() {\n            g()\n}\n"),
            "func f() {\n    g()\n}\n"
        );
    }
}
