use crate::model::{DiagnosticData, EvidenceIndex, SignatureEvidence};
use crate::policy::{PolicySnapshot, ValidationPolicy};
use crate::process::long_term::validate_long_term;
use crate::process::qualification::determine_qualification;
use adesval_types::SignatureReport;
use rayon::prelude::*;
use time::OffsetDateTime;

/// Validates every signature of `data` at `validation_time`. Signatures are independent and
/// run in parallel; the output keeps input order.
pub fn validate(
    data: &DiagnosticData,
    policy: &ValidationPolicy,
    validation_time: OffsetDateTime,
) -> Vec<SignatureReport> {
    let index = EvidenceIndex::new(data);
    let snapshot = policy.snapshot(validation_time);
    data.signatures
        .par_iter()
        .map(|sig| validate_signature(sig, &index, snapshot))
        .collect()
}

pub fn validate_signature(
    sig: &SignatureEvidence,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> SignatureReport {
    let _span = tracing::info_span!("signature", id = %sig.id).entered();

    let long_term = validate_long_term(sig, index, snapshot);
    let conclusion = long_term.conclusion();
    let qualification = determine_qualification(
        sig,
        index,
        &conclusion,
        long_term.best_signature_time,
        snapshot,
    );

    tracing::info!(
        indication = %conclusion.indication,
        sub_indication = ?conclusion.sub_indication,
        qualification = ?qualification.qualification,
        "signature validated"
    );

    let mut blocks = Vec::with_capacity(1 + qualification.blocks.len());
    blocks.push(long_term.report);
    blocks.extend(qualification.blocks);
    SignatureReport {
        signature_id: sig.id.clone(),
        indication: conclusion.indication,
        sub_indication: conclusion.sub_indication,
        best_signature_time: long_term.best_signature_time,
        signing_certificate_id: index
            .signing_certificate(sig)
            .ok()
            .flatten()
            .map(|cert| cert.id.clone()),
        qualification: qualification.qualification,
        blocks,
    }
}
