//! Fuzz target for evidence validation.
//!
//! Goal: Any evidence that deserializes must validate without panicking. Dangling ids and
//! other contract violations surface as `EVIDENCE_STRUCTURE_FAILURE`, never as a crash.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evidence_json
//! ```

#![no_main]

use adesval_domain::model::DiagnosticData;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use time::macros::datetime;

fn policy() -> &'static adesval_domain::policy::ValidationPolicy {
    static POLICY: OnceLock<adesval_domain::policy::ValidationPolicy> = OnceLock::new();
    POLICY.get_or_init(|| {
        adesval_policy::resolve_policy(Default::default(), Default::default())
            .expect("default policy resolves")
            .effective
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(evidence) = serde_json::from_slice::<DiagnosticData>(data) else {
        return;
    };
    if evidence.signatures.len() > 16 || evidence.timestamps.len() > 32 {
        return;
    }
    let reports = adesval_domain::validate(&evidence, policy(), datetime!(2025-01-01 00:00 UTC));
    assert_eq!(reports.len(), evidence.signatures.len());
});
