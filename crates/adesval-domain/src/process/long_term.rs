//! Validation process for signatures with long-term and archival data.
//!
//! The basic process runs at the validation time. Each signature time-stamp and archive
//! time-stamp is validated on its own; those that pass give proof of existence (POE) of the
//! signature at their production time. The time-dependent blocks are then re-evaluated at
//! every POE instant and the earliest passing instant becomes the best signature time.

use super::archive::validate_archive_chain;
use super::basic::{past_signature_validation, validate_basic};
use super::timestamp::validate_timestamp;
use super::conclusion_of;
use crate::chain::Chain;
use crate::checks::tsc;
use crate::composer::{Composer, TimeIndexedRun, earliest_passing, run_at_times};
use crate::model::{EvidenceIndex, SignatureEvidence, TimestampEvidence, TimestampKind};
use crate::policy::PolicySnapshot;
use adesval_types::{BlockId, BlockReport, Conclusion, Message, MessageTag};
use rayon::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct LongTermOutcome {
    pub report: BlockReport,
    /// `None` when the signature could not be identified or verified at all.
    pub best_signature_time: Option<OffsetDateTime>,
}

impl LongTermOutcome {
    pub fn conclusion(&self) -> Conclusion {
        conclusion_of(&self.report)
    }
}

pub fn validate_long_term(
    sig: &SignatureEvidence,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> LongTermOutcome {
    let basic = validate_basic(sig, index, snapshot);
    let mut composer = Composer::new(BlockId::Vpfltvd, sig.id.as_str(), snapshot.reference_time);

    let timestamps: Vec<&TimestampEvidence> = match sig
        .timestamp_ids
        .iter()
        .map(|id| index.timestamp(id))
        .collect()
    {
        Ok(timestamps) => timestamps,
        Err(fault) => {
            tracing::warn!(signature = %sig.id, %fault, "evidence contract violation");
            composer.record(basic);
            return LongTermOutcome {
                report: composer.finish_with(fault.conclusion()),
                best_signature_time: None,
            };
        }
    };

    let timestamp_reports: Vec<BlockReport> = timestamps
        .par_iter()
        .map(|&ts| validate_timestamp(ts, index, snapshot))
        .collect();
    let validated: Vec<(&TimestampEvidence, &BlockReport)> =
        timestamps.iter().copied().zip(timestamp_reports.iter()).collect();

    let archives: Vec<(&TimestampEvidence, &BlockReport)> = validated
        .iter()
        .copied()
        .filter(|(ts, _)| ts.kind == TimestampKind::Archive)
        .collect();
    let erv = (!archives.is_empty()).then(|| validate_archive_chain(sig, &archives, snapshot));

    let mut candidates = vec![snapshot.reference_time];
    candidates.extend(
        validated
            .iter()
            .filter(|(ts, report)| ts.kind == TimestampKind::Signature && report.is_passed())
            .map(|(ts, _)| ts.production_time),
    );
    if erv.as_ref().is_some_and(BlockReport::is_passed) {
        candidates.extend(archives.iter().map(|(ts, _)| ts.production_time));
    }

    let verifiable = [BlockId::Isc, BlockId::Cv]
        .iter()
        .all(|id| basic.child(*id).is_some_and(BlockReport::is_passed));
    let runs: Vec<TimeIndexedRun> = if verifiable {
        run_at_times(&candidates, |t| {
            past_signature_validation(sig, index, snapshot.at(t))
        })
    } else {
        Vec::new()
    };
    let best_signature_time = if verifiable {
        earliest_passing(&runs)
            .map(|run| run.time)
            .or_else(|| candidates.iter().min().copied())
    } else {
        None
    };

    let basic_conclusion = conclusion_of(&basic);
    let rescued = basic_conclusion.is_indeterminate()
        && basic_conclusion
            .sub_indication
            .is_some_and(|sub| sub.is_poe_rescuable())
        && earliest_passing(&runs).is_some();
    let effective = if rescued {
        tracing::debug!(signature = %sig.id, "proof of existence rescues basic verdict");
        let mut passed = Conclusion::passed();
        passed.warnings = basic_conclusion.warnings;
        passed.infos = basic_conclusion.infos;
        passed
    } else {
        basic_conclusion
    };

    let tsc = best_signature_time.map(|bst| {
        let passed: Vec<&TimestampEvidence> = validated
            .iter()
            .filter(|(_, report)| report.is_passed())
            .map(|(ts, _)| *ts)
            .collect();
        coherence(sig, passed, bst, snapshot.at(bst))
    });

    let mut conclusion = Conclusion::passed();
    let mut decided = false;
    let folded = std::iter::once(effective)
        .chain(erv.iter().map(conclusion_of))
        .chain(tsc.iter().map(conclusion_of));
    for c in folded {
        conclusion.warnings.extend(c.warnings.iter().cloned());
        conclusion.infos.extend(c.infos.iter().cloned());
        if !decided && !c.is_passed() {
            conclusion.indication = c.indication;
            conclusion.sub_indication = c.sub_indication;
            conclusion.errors = c.errors;
            decided = true;
        }
    }
    if let Some(bst) = best_signature_time {
        conclusion.infos.push(
            Message::new(MessageTag::InfoBestSignatureTime)
                .arg(crate::checks::format_time(bst)),
        );
    }

    composer.record(basic);
    for report in timestamp_reports {
        composer.attach(report);
    }
    if let Some(erv) = erv {
        composer.record(erv);
    }
    if verifiable {
        for run in runs {
            composer.attach(run.report);
        }
    } else {
        composer.attach(BlockReport::not_evaluated(
            BlockId::Psv,
            sig.id.as_str(),
            snapshot.reference_time,
            BlockId::Vpbs,
        ));
    }
    composer.record(tsc.unwrap_or_else(|| {
        BlockReport::not_evaluated(
            BlockId::Tsc,
            sig.id.as_str(),
            snapshot.reference_time,
            BlockId::Vpbs,
        )
    }));
    LongTermOutcome {
        report: composer.finish_with(conclusion),
        best_signature_time,
    }
}

/// Time-stamp coherence at the best signature time.
fn coherence(
    sig: &SignatureEvidence,
    timestamps: Vec<&TimestampEvidence>,
    best_signature_time: OffsetDateTime,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let policy = snapshot.policy;
    let mut chain = Chain::new(BlockId::Tsc, sig.id.as_str(), snapshot);
    chain
        .push(tsc::TimestampOrder {
            timestamps,
            clock_skew: policy.clock_skew,
        })
        .push(tsc::SigningTimeBeforeBestSignatureTime {
            claimed_signing_time: sig.claimed_signing_time,
            best_signature_time,
            clock_skew: policy.clock_skew,
        })
        .push(tsc::TimestampDelay {
            claimed_signing_time: sig.claimed_signing_time,
            best_signature_time,
            delay: policy.timestamp_delay,
        });
    chain.execute()
}
