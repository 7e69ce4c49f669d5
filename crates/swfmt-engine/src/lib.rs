//! swfmt-engine - The fixed-point rule-application engine.
//!
//! Formatting is rewriting: a list of rules runs repeatedly over a token
//! buffer until one full pass changes nothing. This crate provides the
//! formatter state rules operate on, the engine that drives them with
//! bounded iteration and per-rule time budgets, the built-in rule catalog,
//! and the cache fingerprint used by callers that memoize results.
//!
//! # Example
//!
//! ```
//! use swfmt_engine::{default_rules, format};
//! use swfmt_util::FormatOptions;
//!
//! let output = format(
//!     "func greet()\n{\nprint(\"hi\")\n}",
//!     &default_rules(),
//!     &FormatOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(output, "func greet() {\n    print(\"hi\")\n}\n");
//! ```

mod engine;
mod fingerprint;
mod formatter;
mod infer;
mod rules;

pub use engine::{apply_rules, RuleCallback};
pub use fingerprint::fingerprint;
pub use formatter::Formatter;
pub use infer::infer_shared_options;
pub use rules::{default_rules, Rule};

use swfmt_lex::{source_code, tokenize, Token};
use swfmt_util::{FormatOptions, Result};

/// Formats source text with the given rules and options.
pub fn format(source: &str, rules: &[Rule], options: &FormatOptions) -> Result<String> {
    let tokens = apply_rules(rules, tokenize(source), options, None)?;
    Ok(source_code(&tokens))
}

/// Formats an already-tokenized buffer with the given rules and options.
pub fn format_tokens(
    tokens: Vec<Token>,
    rules: &[Rule],
    options: &FormatOptions,
) -> Result<Vec<Token>> {
    apply_rules(rules, tokens, options, None)
}
