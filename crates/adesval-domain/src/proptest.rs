//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Chain short-circuiting and level handling
//! - Composer folding
//! - Archive time-stamp coverage modes
//! - Determinism and per-signature independence of the engine

use crate::chain::Chain;
use crate::check::Check;
use crate::checks::erv::ArchiveTimestampsCoverEachOther;
use crate::composer::Composer;
use crate::model::{DiagnosticData, TimestampEvidence, TimestampKind};
use crate::policy::{CoverageMode, ValidationPolicy};
use crate::test_support::{
    Scripted, VALIDATION_TIME, at, baseline, revoked, strict_policy, timestamp,
    with_signature_timestamp,
};
use adesval_types::{
    BlockId, BlockReport, CheckDescriptor, ConstraintLevel, ConstraintStatus, Indication, catalog,
};
use proptest::prelude::*;
use time::Duration;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Pass,
    Fail,
    Fault,
}

fn arb_level() -> impl Strategy<Value = ConstraintLevel> {
    prop_oneof![
        Just(ConstraintLevel::Enforced),
        Just(ConstraintLevel::Warn),
        Just(ConstraintLevel::Inform),
        Just(ConstraintLevel::Ignore),
    ]
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        4 => Just(Outcome::Pass),
        3 => Just(Outcome::Fail),
        1 => Just(Outcome::Fault),
    ]
}

fn arb_descriptor() -> impl Strategy<Value = &'static CheckDescriptor> {
    prop::sample::select(catalog::CATALOG.to_vec())
}

type Step = (ConstraintLevel, Outcome, &'static CheckDescriptor);

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec((arb_level(), arb_outcome(), arb_descriptor()), 0..12)
}

fn scripted(outcome: Outcome, descriptor: &'static CheckDescriptor) -> Scripted {
    match outcome {
        Outcome::Pass => Scripted::pass(descriptor),
        Outcome::Fail => Scripted::fail(descriptor),
        Outcome::Fault => Scripted::fault(descriptor),
    }
}

fn execute(policy: &ValidationPolicy, steps: &[Step]) -> BlockReport {
    let mut chain = Chain::new(BlockId::Sav, "S", policy.snapshot(at("2025-01-01T00:00:00Z")));
    for (level, outcome, descriptor) in steps {
        chain.push_at(*level, scripted(*outcome, descriptor));
    }
    chain.execute()
}

/// Index of the step a correct chain stops at, if any.
fn stopping_step(steps: &[Step]) -> Option<usize> {
    steps.iter().position(|(level, outcome, _)| match (level, outcome) {
        (ConstraintLevel::Ignore, _) => false,
        (_, Outcome::Fault) => true,
        (ConstraintLevel::Enforced, Outcome::Fail) => true,
        _ => false,
    })
}

/// Archive time-stamps one month apart, each covering its predecessor and, when the flag
/// is set, also every earlier one.
fn arb_archive_chain() -> impl Strategy<Value = Vec<TimestampEvidence>> {
    prop::collection::vec(any::<bool>(), 1..8).prop_map(|full| {
        let base = at("2020-01-01T00:00:00Z");
        let ids: Vec<String> = (0..full.len()).map(|i| format!("ATS{i}")).collect();
        full.iter()
            .enumerate()
            .map(|(i, covers_all)| {
                let covers: Vec<&str> = match (i, covers_all) {
                    (0, _) => vec!["S1"],
                    (_, true) => ids[..i].iter().map(String::as_str).collect(),
                    (_, false) => vec![ids[i - 1].as_str()],
                };
                let mut ts = timestamp(&ids[i], TimestampKind::Archive, "2020-01-01T00:00:00Z", &["tsa"], &covers);
                ts.production_time = base + Duration::days(30 * i as i64);
                ts
            })
            .collect()
    })
}

fn day(offset: i64) -> String {
    (at("2024-01-01T00:00:00Z") + Duration::days(offset))
        .format(&Rfc3339)
        .expect("format")
}

/// Two signatures over the baseline evidence with a random mix of broken signature values,
/// signer revocation and a signature time-stamp on the first one.
fn arb_evidence() -> impl Strategy<Value = DiagnosticData> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::option::of(0i64..400),
        prop::option::of(0i64..400),
    )
        .prop_map(|(s1_intact, s2_intact, revoked_after, stamped_after)| {
            let mut data = baseline();
            let mut s2 = data.signatures[0].clone();
            s2.id = "S2".to_string();
            s2.signature_intact = s2_intact;
            data.signatures[0].signature_intact = s1_intact;
            if let Some(offset) = revoked_after {
                data.revocations[0] = revoked(data.revocations[0].clone(), &day(offset));
            }
            if let Some(offset) = stamped_after {
                data = with_signature_timestamp(data, &day(offset));
            }
            data.signatures.push(s2);
            data
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Evaluation stops right after the first ENFORCED failure or evidence fault, and
    /// ignored checks never leave a record.
    #[test]
    fn chain_short_circuits_at_first_disqualifier(steps in arb_steps()) {
        let policy = ValidationPolicy::default();
        let report = execute(&policy, &steps);

        let considered = match stopping_step(&steps) {
            Some(stop) => &steps[..=stop],
            None => &steps[..],
        };
        let expected: Vec<&str> = considered
            .iter()
            .filter(|(level, _, _)| *level != ConstraintLevel::Ignore)
            .map(|(_, _, d)| d.id)
            .collect();
        prop_assert_eq!(report.executed_check_ids(), expected);
        prop_assert_eq!(report.is_passed(), stopping_step(&steps).is_none());
    }

    /// Once disqualified, the verdict is the one of the disqualifying check.
    #[test]
    fn disqualifying_verdict_comes_from_the_stopping_check(steps in arb_steps()) {
        let policy = ValidationPolicy::default();
        let report = execute(&policy, &steps);
        let conclusion = report.conclusion().cloned().expect("chains are always evaluated");
        if let Some(stop) = stopping_step(&steps) {
            let (_, outcome, descriptor) = steps[stop];
            match outcome {
                Outcome::Fault => prop_assert_eq!(conclusion.indication, Indication::Indeterminate),
                _ => {
                    prop_assert_eq!(conclusion.indication, descriptor.indication);
                    prop_assert_eq!(conclusion.sub_indication, Some(descriptor.sub_indication()));
                }
            }
            prop_assert_eq!(conclusion.errors.len(), 1);
        } else {
            prop_assert!(conclusion.errors.is_empty());
        }
    }

    /// Relaxing ENFORCED checks to WARN never turns a passing chain into a failing one, and
    /// non-enforced failures only add messages.
    #[test]
    fn relaxing_levels_is_monotone(steps in arb_steps()) {
        let policy = ValidationPolicy::default();
        let strict = execute(&policy, &steps);
        let relaxed_steps: Vec<Step> = steps
            .iter()
            .map(|(level, outcome, d)| match level {
                ConstraintLevel::Enforced => (ConstraintLevel::Warn, *outcome, *d),
                other => (*other, *outcome, *d),
            })
            .collect();
        let relaxed = execute(&policy, &relaxed_steps);
        if strict.is_passed() {
            prop_assert!(relaxed.is_passed());
        }
        let faults = relaxed_steps
            .iter()
            .any(|(level, outcome, _)| *level != ConstraintLevel::Ignore && *outcome == Outcome::Fault);
        prop_assert_eq!(relaxed.is_passed(), !faults);

        let warnings = relaxed
            .constraints()
            .iter()
            .filter(|r| r.status == ConstraintStatus::Warning)
            .count();
        prop_assert_eq!(warnings, relaxed.conclusion().map(|c| c.warnings.len()).unwrap_or(0));
    }

    /// A chain whose checks are all ignored is a vacuous pass.
    #[test]
    fn all_ignored_chain_is_vacuous_pass(steps in arb_steps()) {
        let policy = ValidationPolicy::default();
        let ignored: Vec<Step> = steps
            .into_iter()
            .map(|(_, outcome, d)| (ConstraintLevel::Ignore, outcome, d))
            .collect();
        let report = execute(&policy, &ignored);
        prop_assert!(report.is_passed());
        prop_assert!(report.constraints().is_empty());
    }

    /// The folded verdict is the first non-passed folded block's verdict.
    #[test]
    fn composer_fold_takes_first_non_passed(blocks in prop::collection::vec(arb_steps(), 0..6)) {
        let policy = ValidationPolicy::default();
        let reports: Vec<BlockReport> = blocks.iter().map(|steps| execute(&policy, steps)).collect();
        let mut composer = Composer::new(BlockId::Vpbs, "S", at("2025-01-01T00:00:00Z"));
        for report in &reports {
            composer.record(report.clone());
        }
        let folded = composer.fold();
        match reports.iter().find(|r| !r.is_passed()) {
            Some(first) => {
                let c = first.conclusion().expect("evaluated");
                prop_assert_eq!(folded.indication, c.indication);
                prop_assert_eq!(folded.sub_indication, c.sub_indication);
            }
            None => prop_assert!(folded.is_passed()),
        }
    }

    /// Chains built from adjacent links always satisfy adjacent coverage; transitive
    /// coverage holds exactly when every link covers all its predecessors.
    #[test]
    fn coverage_modes_agree_with_construction(chain in arb_archive_chain()) {
        let refs: Vec<&TimestampEvidence> = chain.iter().rev().collect();
        let adjacent = ArchiveTimestampsCoverEachOther::new(refs.clone(), CoverageMode::Adjacent);
        prop_assert_eq!(adjacent.evaluate(), Ok(true));

        let fully_linked = chain
            .iter()
            .enumerate()
            .all(|(i, ts)| chain[..i].iter().all(|prev| ts.covers(&prev.id)));
        let transitive = ArchiveTimestampsCoverEachOther::new(refs, CoverageMode::Transitive);
        prop_assert_eq!(transitive.evaluate(), Ok(fully_linked));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Same evidence, same policy, same time: same reports, and each signature's report does
    /// not depend on the other signatures in the input.
    #[test]
    fn validation_is_deterministic_and_per_signature(data in arb_evidence()) {
        let policy = strict_policy();
        let t = at(VALIDATION_TIME);
        let first = crate::validate(&data, &policy, t);
        prop_assert_eq!(&first, &crate::validate(&data, &policy, t));
        prop_assert_eq!(first.len(), 2);

        for (i, report) in first.iter().enumerate() {
            prop_assert_eq!(&report.signature_id, &data.signatures[i].id);
            let mut alone = data.clone();
            alone.signatures = vec![data.signatures[i].clone()];
            let single = crate::validate(&alone, &policy, t);
            prop_assert_eq!(report, &single[0]);
        }
    }
}
