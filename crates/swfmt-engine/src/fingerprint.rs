//! Cache fingerprints for formatted sources.
//!
//! The external caching layer needs a fingerprint it can compare instead of
//! re-running the formatter: two inputs that would format differently must
//! not collide, and computing the fingerprint must be much cheaper than
//! formatting. Hashing the complete source text plus the options record
//! satisfies both; in particular trailing semicolons, the ordering of import
//! lines, and trailing newlines all change the text and therefore the
//! fingerprint.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use swfmt_util::FormatOptions;

/// Computes the cache fingerprint of a source text under the given options.
pub fn fingerprint(source: &str, options: &FormatOptions) -> u64 {
    let mut hasher = FxHasher::default();
    source.hash(&mut hasher);
    // the options record participates through its debug rendering, which
    // covers every field including opaque rule options
    format!("{options:?}").hash(&mut hasher);
    hasher.finish()
}
