//! Inference of shared format options from a token buffer.
//!
//! Some options have an obvious answer already present in the source being
//! formatted. Those are inferred into the engine's working options before
//! the first round, so rules that insert new tokens match the file they are
//! editing. Callers never observe the inferred values.

use swfmt_lex::Token;
use swfmt_util::FormatOptions;

/// Merges buffer-derived option values into `options`.
///
/// Currently the one shared-inferable option is the linebreak string: the
/// majority linebreak among the buffer's linebreak tokens wins. A buffer
/// with no linebreaks leaves the configured value alone.
pub fn infer_shared_options(options: &mut FormatOptions, tokens: &[Token]) {
    let mut unix = 0usize;
    let mut dos = 0usize;
    let mut carriage = 0usize;
    for token in tokens {
        if let Token::Linebreak(text) = token {
            match text.as_str() {
                "\r\n" => dos += 1,
                "\r" => carriage += 1,
                _ => unix += 1,
            }
        }
    }
    let best = unix.max(dos).max(carriage);
    if best == 0 {
        return;
    }
    options.linebreak = if best == dos {
        "\r\n".to_string()
    } else if best == unix {
        "\n".to_string()
    } else {
        "\r".to_string()
    };
}
