//! End-to-end formatting tests with the default rule set.

use swfmt_engine::{apply_rules, default_rules, format, Formatter, Rule};
use swfmt_lex::{source_code, tokenize, Token};
use swfmt_util::{Error, FormatOptions};

fn format_default(source: &str) -> String {
    format(source, &default_rules(), &FormatOptions::default()).unwrap()
}

#[test]
fn piped_input_chunks_format_as_one_source() {
    // chunked stdin concatenates before formatting
    let chunks = ["func foo()\n", "{\n", "bar()\n", "}"];
    let source: String = chunks.concat();
    assert_eq!(format_default(&source), "func foo() {\n    bar()\n}\n");
}

#[test]
fn formatting_is_idempotent_over_varied_sources() {
    let sources = [
        "struct A {\nlet x: Array<Int>\n}\n",
        "switch x {\ncase 1:\nfoo();\nbreak\ndefault:\nbreak\n}",
        "a()\n\n\n\nb()  ;\nlet s = \"x \\(y) z\"   \n",
        "#if DEBUG\nprint(\"debug\")\n#endif\n",
    ];
    let rules = default_rules();
    let options = FormatOptions::default();
    for source in sources {
        let once = format(source, &rules, &options).unwrap();
        let twice = format(&once, &rules, &options).unwrap();
        assert_eq!(once, twice, "second pass changed output for {source:?}");
    }
}

#[test]
fn malformed_input_is_a_parsing_error() {
    let result = format("func foo() {", &default_rules(), &FormatOptions::default());
    match result {
        Err(Error::Parsing(message)) => {
            assert!(message.contains("unexpected end of input"), "{message}");
        }
        other => panic!("expected parsing error, got {other:?}"),
    }
}

#[test]
fn fragment_mode_formats_dangling_input() {
    let options = FormatOptions {
        fragment: true,
        ..FormatOptions::default()
    };
    let output = format("if x {\ny()", &default_rules(), &options).unwrap();
    assert_eq!(output, "if x {\n    y()");
}

#[test]
fn oscillating_rules_hit_the_round_limit() {
    fn add_trailing_space(f: &mut Formatter) {
        let last = f.len().saturating_sub(1);
        if !f.tokens()[last].is_whitespace() {
            f.insert(last + 1, Token::Whitespace(" ".to_string()));
        }
    }
    fn strip_trailing_space(f: &mut Formatter) {
        let last = f.len() - 1;
        if f.tokens()[last].is_whitespace() {
            f.remove(last);
        }
    }
    // each round appends then removes, so the buffer oscillates between
    // rounds observed at different points and the comparison never settles
    fn toggle(f: &mut Formatter) {
        let last = f.len() - 1;
        if f.tokens()[last].is_whitespace() {
            strip_trailing_space(f);
        } else {
            add_trailing_space(f);
        }
    }
    let rules = [Rule {
        name: "toggle",
        apply: toggle,
    }];
    let result = apply_rules(
        &rules,
        tokenize("let x = 1"),
        &FormatOptions::default(),
        None,
    );
    match result {
        Err(Error::Writing(message)) => assert!(message.contains("terminate"), "{message}"),
        other => panic!("expected writing error, got {other:?}"),
    }
}

#[test]
fn formatted_output_round_trips_through_tokens() {
    let source = "func foo()\n{\nbar()\n}";
    let tokens = apply_rules(
        &default_rules(),
        tokenize(source),
        &FormatOptions::default(),
        None,
    )
    .unwrap();
    assert_eq!(source_code(&tokens), "func foo() {\n    bar()\n}\n");
}

#[test]
fn callback_observes_every_rule_in_order() {
    let rules = default_rules();
    let mut seen = Vec::new();
    let mut callback = |index: usize, _tokens: &[Token], _warnings: &[swfmt_util::Warning]| {
        seen.push(index);
    };
    apply_rules(
        &rules,
        tokenize("let x = 1\n"),
        &FormatOptions::default(),
        Some(&mut callback),
    )
    .unwrap();
    assert_eq!(seen.len() % rules.len(), 0);
    assert_eq!(&seen[..rules.len()], &(0..rules.len()).collect::<Vec<_>>()[..]);
}
