//! Fuzz target for policy document parsing and resolution.
//!
//! Goal: Parsing and resolution should **never panic** on any input.
//! Malformed documents must come back as `PolicyError`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_toml
//! ```

#![no_main]

use adesval_policy::{Overrides, parse_policy_toml, resolve_policy};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PolicyInput {
    text: String,
    profile: Option<String>,
}

fuzz_target!(|input: PolicyInput| {
    if input.text.len() > 64 * 1024 {
        return;
    }
    if let Ok(doc) = parse_policy_toml(&input.text) {
        let _ = resolve_policy(
            doc,
            Overrides {
                profile: input.profile,
            },
        );
    }
});
