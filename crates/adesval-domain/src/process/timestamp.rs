//! Validation process for time-stamps.

use super::basic::{certificate_validation, cryptographic_verification, identify_signing_certificate};
use crate::chain::Chain;
use crate::checks::crypto::CryptoConstraintsCheck;
use crate::composer::{Composer, Requirement};
use crate::model::{EvidenceIndex, TimestampEvidence};
use crate::policy::PolicySnapshot;
use adesval_types::{BlockId, BlockReport, catalog};

/// Time-stamp acceptance: only the algorithm constraints apply, evaluated at production time.
fn timestamp_acceptance(ts: &TimestampEvidence, snapshot: PolicySnapshot<'_>) -> BlockReport {
    let mut chain = Chain::new(BlockId::Sav, ts.id.as_str(), snapshot);
    chain.push(CryptoConstraintsCheck {
        descriptor: &catalog::SAV_CRYPTO_CONSTRAINTS,
        subject_id: &ts.id,
        algorithm: &ts.algorithm,
        constraints: &snapshot.policy.crypto,
        at: ts.production_time,
    });
    chain.execute()
}

pub fn validate_timestamp(
    ts: &TimestampEvidence,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let mut composer = Composer::new(BlockId::Vpftsp, ts.id.as_str(), snapshot.reference_time);
    composer.run(BlockId::Isc, &[], |_| identify_signing_certificate(ts, index, snapshot));
    composer.run(BlockId::Xcv, &[Requirement::Passed(BlockId::Isc)], |_| {
        certificate_validation(ts, index, snapshot)
    });
    composer.run(BlockId::Cv, &[Requirement::Passed(BlockId::Isc)], |_| {
        cryptographic_verification(ts, snapshot)
    });
    composer.run(BlockId::Sav, &[Requirement::NotFailed(BlockId::Cv)], |_| {
        timestamp_acceptance(ts, snapshot)
    });
    let report = composer.finish();
    tracing::debug!(timestamp = %ts.id, indication = ?report.indication(), "time-stamp validated");
    report
}
