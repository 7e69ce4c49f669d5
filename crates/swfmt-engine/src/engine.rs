//! The fixed-point rule-application engine.
//!
//! Rules run in order over a shared formatter; a full pass that leaves the
//! buffer unchanged is a fixed point and ends the run. Rules may be mutually
//! rewriting, so iteration is bounded: after ten rounds without convergence
//! the run fails with a writing error rather than looping. Each rule is
//! dispatched onto a worker thread for the sole purpose of bounding its
//! wall-clock time; the driver always waits for one rule before invoking
//! the next.

use std::thread;
use std::time::Duration;

use crossbeam::channel;

use swfmt_lex::{parsing_error, Token};
use swfmt_util::{Error, FileHeader, FormatOptions, Result, Warning};

use crate::formatter::Formatter;
use crate::infer::infer_shared_options;
use crate::rules::Rule;

/// Rounds attempted before declaring the rule set non-terminating.
const MAX_ROUNDS: usize = 10;

/// Callback invoked after each rule with the rule's position in the list,
/// the buffer it produced, and the warnings it emitted.
pub type RuleCallback<'a> = &'a mut dyn FnMut(usize, &[Token], &[Warning]);

/// Applies `rules` to `tokens` until a fixed point is reached.
///
/// The input is rejected up front if the parsing-error scanner finds a
/// diagnostic. Options the buffer can speak for (currently the linebreak
/// string) are inferred into a working copy; the caller's options are not
/// modified. The file-header rule is forced into its ignore mode on every
/// round after the first, which removes the one known oscillation source.
pub fn apply_rules(
    rules: &[Rule],
    tokens: Vec<Token>,
    options: &FormatOptions,
    mut callback: Option<RuleCallback<'_>>,
) -> Result<Vec<Token>> {
    options.validate()?;
    if let Some(diagnostic) = parsing_error(&tokens, options) {
        return Err(Error::Parsing(diagnostic.to_string()));
    }

    let mut working = options.clone();
    infer_shared_options(&mut working, &tokens);

    let mut current = tokens;
    for round in 0..MAX_ROUNDS {
        if round > 0 {
            working.file_header = FileHeader::Ignore;
        }
        let at_round_start = current.clone();
        for (index, rule) in rules.iter().enumerate() {
            let budget = rule_budget(current.len());
            let formatter = Formatter::new(current, working.clone());
            let mut formatter = run_rule(rule, formatter, budget)?;
            let warnings = formatter.take_warnings();
            if let Some(callback) = callback.as_mut() {
                callback(index, formatter.tokens(), &warnings);
            }
            current = formatter.into_tokens();
        }
        if current == at_round_start {
            return Ok(current);
        }
    }
    Err(Error::Writing(
        "failed to terminate: rule set did not converge".to_string(),
    ))
}

/// The wall-clock budget for one rule over a buffer of `token_count` tokens.
fn rule_budget(token_count: usize) -> Duration {
    Duration::from_secs(1 + token_count as u64 / 1000)
}

/// Runs one rule on a worker thread and waits for it with a timeout.
///
/// A rule that exceeds its budget is abandoned; its thread is detached and
/// the whole format call fails, so no partial output escapes.
fn run_rule(rule: &Rule, formatter: Formatter, budget: Duration) -> Result<Formatter> {
    let (sender, receiver) = channel::bounded(1);
    let apply = rule.apply;
    thread::Builder::new()
        .name(format!("swfmt-rule-{}", rule.name))
        .spawn(move || {
            let mut formatter = formatter;
            apply(&mut formatter);
            let _ = sender.send(formatter);
        })
        .map_err(|e| Error::Writing(format!("could not spawn worker for rule {}: {e}", rule.name)))?;

    receiver.recv_timeout(budget).map_err(|_| {
        Error::Writing(format!("rule {} exceeded its time budget", rule.name))
    })
}
