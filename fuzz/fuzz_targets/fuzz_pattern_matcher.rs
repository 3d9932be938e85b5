//! Fuzz target for the file pattern matcher.
//!
//! Goal: compiling and matching **never panic** on any input.
//! Compilation may reject a pattern list; matching must then simply not happen.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_pattern_matcher
//! ```

#![no_main]

use arbitrary::Arbitrary;
use declguard_domain::pattern::{is_file_allowed, PatternSet};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct MatchInput {
    /// Pattern list as configured (e.g. "*.d.ts", "!src/legacy*").
    patterns: Vec<String>,
    /// Candidate file paths, with either separator.
    paths: Vec<String>,
}

fuzz_target!(|input: MatchInput| {
    if input.patterns.len() > 20 || input.paths.len() > 100 {
        return;
    }

    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .filter(|p| p.len() <= 256)
        .collect();

    let Ok(set) = PatternSet::compile(&patterns) else {
        return;
    };

    for path in input.paths.iter().filter(|p| p.len() <= 512) {
        let allowed = is_file_allowed(path, &set);
        // A negative-only set allows nothing.
        if set.positives().next().is_none() {
            assert!(!allowed);
        }
    }
});
