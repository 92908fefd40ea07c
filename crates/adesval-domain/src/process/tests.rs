use super::basic::signature_acceptance;
use crate::model::{DiagnosticData, TimestampKind};
use crate::policy::{CoverageMode, ValidationPolicy};
use crate::test_support::{
    VALIDATION_TIME, anchor, at, baseline, cert, ocsp, qualified, qualified_ca_service, revoked,
    strict_policy, timestamp, with_level, with_signature_timestamp,
};
use crate::validate;
use adesval_types::{
    BlockId, BlockOutcome, ConstraintLevel, Indication, MessageTag, SignatureQualification,
    SignatureReport, SubIndication, ids,
};

fn run(data: &DiagnosticData, policy: &ValidationPolicy) -> SignatureReport {
    let mut reports = validate(data, policy, at(VALIDATION_TIME));
    assert_eq!(reports.len(), 1);
    reports.remove(0)
}

fn with_revoked_signer(mut data: DiagnosticData) -> DiagnosticData {
    data.revocations[0] = revoked(
        ocsp("ocsp-signer", "signer", "2024-12-31T12:00:00Z"),
        "2024-09-01T00:00:00Z",
    );
    data
}

fn with_archive_timestamp(
    mut data: DiagnosticData,
    id: &str,
    production_time: &str,
    covers: &[&str],
) -> DiagnosticData {
    data.timestamps.push(timestamp(
        id,
        TimestampKind::Archive,
        production_time,
        &["tsa", "root"],
        covers,
    ));
    data.signatures[0].timestamp_ids.push(id.to_string());
    data
}

/// ATS3 covers only ATS2, which covers ATS1.
fn archive_chain_with_gap() -> DiagnosticData {
    let data = with_archive_timestamp(baseline(), "ATS1", "2024-07-01T00:00:00Z", &["S1"]);
    let data = with_archive_timestamp(data, "ATS2", "2024-08-01T00:00:00Z", &["S1", "ATS1"]);
    with_archive_timestamp(data, "ATS3", "2024-09-01T00:00:00Z", &["ATS2"])
}

#[test]
fn baseline_signature_passes_at_validation_time() {
    let report = run(&baseline(), &strict_policy());
    assert_eq!(report.indication, Indication::Passed);
    assert_eq!(report.sub_indication, None);
    assert_eq!(report.best_signature_time, Some(at(VALIDATION_TIME)));
    assert_eq!(report.signing_certificate_id.as_deref(), Some("signer"));
    assert_eq!(report.qualification, SignatureQualification::Ades);

    let basic = report.block(BlockId::Vpbs).expect("basic process");
    let order: Vec<BlockId> = basic.children.iter().map(|b| b.block).collect();
    assert_eq!(
        order,
        vec![BlockId::Fc, BlockId::Isc, BlockId::Xcv, BlockId::Cv, BlockId::Sav]
    );
    let xcv = basic.child(BlockId::Xcv).expect("xcv");
    let sub = xcv.find(BlockId::SubXcv).expect("signer sub-validation");
    assert_eq!(sub.token_id, "signer");
    assert!(sub.find(BlockId::Rfc).is_some());
}

#[test]
fn validation_at_the_end_of_representable_time_completes() {
    let late = at("9999-12-31T23:59:00Z");
    let mut data = baseline();
    data.signatures[0].claimed_signing_time = Some(late);
    let reports = validate(&data, &strict_policy(), late);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].block(BlockId::Vpbs).is_some());
}

#[test]
fn failed_format_gates_every_later_block() {
    let mut policy = strict_policy();
    policy.accepted_formats = vec!["CAdES-BASELINE-B".to_string()];
    let report = run(&baseline(), &policy);
    assert_eq!(report.indication, Indication::Failed);
    assert_eq!(report.sub_indication, Some(SubIndication::FormatFailure));
    assert_eq!(report.best_signature_time, None);
    assert_eq!(report.qualification, SignatureQualification::Na);

    let basic = report.block(BlockId::Vpbs).expect("basic process");
    let blocked: Vec<(BlockId, BlockOutcome)> = basic
        .children
        .iter()
        .skip(1)
        .map(|b| (b.block, b.outcome.clone()))
        .collect();
    assert_eq!(
        blocked,
        vec![
            (BlockId::Isc, BlockOutcome::NotEvaluated { blocked_by: BlockId::Fc }),
            (BlockId::Xcv, BlockOutcome::NotEvaluated { blocked_by: BlockId::Isc }),
            (BlockId::Cv, BlockOutcome::NotEvaluated { blocked_by: BlockId::Isc }),
            (BlockId::Sav, BlockOutcome::NotEvaluated { blocked_by: BlockId::Cv }),
        ]
    );

    for block in [BlockId::Psv, BlockId::Tsc, BlockId::QualCert, BlockId::QualSig] {
        assert_eq!(
            report.block(block).map(|b| b.outcome.clone()),
            Some(BlockOutcome::NotEvaluated { blocked_by: BlockId::Vpbs }),
            "{block}"
        );
    }
    assert_eq!(
        report.block(BlockId::QualCert).map(|b| b.token_id.as_str()),
        Some("signer")
    );
}

#[test]
fn unidentified_signing_certificate_is_indeterminate() {
    let mut data = baseline();
    if let Some(reference) = data.signatures[0].signing_certificate.as_mut() {
        reference.certificate_id = None;
    }
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Indeterminate);
    assert_eq!(
        report.sub_indication,
        Some(SubIndication::NoSigningCertificateFound)
    );
    assert_eq!(report.signing_certificate_id, None);
}

#[test]
fn revoked_signer_without_proof_of_existence_stays_indeterminate() {
    let report = run(&with_revoked_signer(baseline()), &strict_policy());
    assert_eq!(report.indication, Indication::Indeterminate);
    assert_eq!(report.sub_indication, Some(SubIndication::RevokedNoPoe));
    assert_eq!(report.qualification, SignatureQualification::IndeterminateAdes);
}

#[test]
fn signature_timestamp_before_revocation_rescues_the_signature() {
    let data = with_signature_timestamp(
        with_revoked_signer(baseline()),
        "2024-06-01T00:00:00Z",
    );
    let report = run(&data, &strict_policy());

    assert_eq!(report.indication, Indication::Passed);
    assert_eq!(report.best_signature_time, Some(at("2024-06-01T00:00:00Z")));

    let long_term = &report.blocks[0];
    assert_eq!(long_term.block, BlockId::Vpfltvd);
    let basic = long_term.child(BlockId::Vpbs).expect("basic process");
    assert_eq!(
        basic.conclusion().and_then(|c| c.sub_indication),
        Some(SubIndication::RevokedNoPoe)
    );
    let runs: Vec<_> = long_term
        .children
        .iter()
        .filter(|b| b.block == BlockId::Psv)
        .map(|b| (b.reference_time, b.is_passed()))
        .collect();
    assert_eq!(
        runs,
        vec![
            (at("2024-06-01T00:00:00Z"), true),
            (at(VALIDATION_TIME), false),
        ]
    );
    let infos = &long_term.conclusion().expect("evaluated").infos;
    assert!(infos.iter().any(|m| m.tag == MessageTag::InfoBestSignatureTime));
}

#[test]
fn failed_timestamp_gives_no_proof_and_does_not_fail_the_signature() {
    let mut data = with_signature_timestamp(
        with_revoked_signer(baseline()),
        "2024-06-01T00:00:00Z",
    );
    if let Some(matchers) = data.timestamps[0].digest_matchers.as_mut() {
        matchers[0].data_intact = false;
    }
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Indeterminate);
    assert_eq!(report.sub_indication, Some(SubIndication::RevokedNoPoe));

    let ts = report.block(BlockId::Vpftsp).expect("timestamp process");
    assert_eq!(ts.indication(), Some(Indication::Failed));
    assert_eq!(
        ts.conclusion().and_then(|c| c.sub_indication),
        Some(SubIndication::HashFailure)
    );
}

#[test]
fn dangling_timestamp_reference_is_an_evidence_structure_failure() {
    let mut data = baseline();
    data.signatures[0].timestamp_ids.push("missing".to_string());
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Indeterminate);
    assert_eq!(
        report.sub_indication,
        Some(SubIndication::EvidenceStructureFailure)
    );
}

#[test]
fn duplicated_signing_certificate_id_is_an_evidence_structure_failure() {
    let mut data = baseline();
    let signer = data
        .certificates
        .iter()
        .find(|c| c.id == "signer")
        .cloned()
        .expect("signer certificate");
    data.certificates.push(signer);
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Indeterminate);
    assert_eq!(
        report.sub_indication,
        Some(SubIndication::EvidenceStructureFailure)
    );
}

#[test]
fn warn_level_failure_is_reported_but_signature_passes() {
    let mut data = baseline();
    data.signatures[0].content_type = None;
    let policy = with_level(
        strict_policy(),
        ids::CHECK_SAV_CONTENT_TYPE_PRESENT,
        ConstraintLevel::Warn,
    );
    let report = run(&data, &policy);
    assert_eq!(report.indication, Indication::Passed);
    let warnings = &report.blocks[0].conclusion().expect("evaluated").warnings;
    assert!(
        warnings
            .iter()
            .any(|m| m.tag == MessageTag::SavContentTypePresentAns)
    );
}

#[test]
fn missing_digest_matchers_in_acceptance_follow_the_configured_level() {
    let mut data = baseline();
    data.signatures[0].digest_matchers = None;
    let policy = with_level(
        strict_policy(),
        ids::CHECK_SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT,
        ConstraintLevel::Warn,
    );
    let report = signature_acceptance(&data.signatures[0], policy.snapshot(at(VALIDATION_TIME)));
    let conclusion = report.conclusion().expect("evaluated");
    assert_eq!(conclusion.indication, Indication::Passed);
    assert_eq!(conclusion.warnings.len(), 1);
    assert_eq!(conclusion.warnings[0].tag, MessageTag::EvidenceStructureViolation);

    let policy = strict_policy();
    let report = signature_acceptance(&data.signatures[0], policy.snapshot(at(VALIDATION_TIME)));
    let conclusion = report.conclusion().expect("evaluated");
    assert_eq!(conclusion.indication, Indication::Indeterminate);
    assert_eq!(
        conclusion.sub_indication,
        Some(SubIndication::EvidenceStructureFailure)
    );
}

#[test]
fn adjacent_coverage_accepts_a_non_adjacent_gap() {
    let data = archive_chain_with_gap();
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Passed);
    let erv = report.block(BlockId::Erv).expect("archive chain");
    assert!(erv.is_passed());
    assert_eq!(
        erv.executed_check_ids()
            .iter()
            .filter(|id| **id == ids::CHECK_ERV_ARCHIVE_TIMESTAMP_VALID)
            .count(),
        3
    );
    assert_eq!(report.best_signature_time, Some(at("2024-07-01T00:00:00Z")));
}

#[test]
fn transitive_coverage_rejects_a_non_adjacent_gap() {
    let data = archive_chain_with_gap();
    let mut policy = strict_policy();
    policy.archive_coverage = CoverageMode::Transitive;
    let report = run(&data, &policy);
    assert_eq!(report.indication, Indication::Failed);
    assert_eq!(
        report.sub_indication,
        Some(SubIndication::TimestampCoverageFailure)
    );
}

#[test]
fn archive_chain_must_start_at_the_signature() {
    let data = with_archive_timestamp(baseline(), "ATS1", "2024-07-01T00:00:00Z", &["S2"]);
    let report = run(&data, &strict_policy());
    assert_eq!(report.indication, Indication::Failed);
    let erv = report.block(BlockId::Erv).expect("archive chain");
    assert_eq!(
        erv.executed_check_ids().last().copied(),
        Some(ids::CHECK_ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE)
    );
}

fn qualified_data(service_from: &str) -> DiagnosticData {
    let mut data = baseline();
    data.certificates[0] = qualified(cert("signer", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z"));
    let mut root = anchor("root");
    root.trusted_services.push(qualified_ca_service(service_from));
    data.certificates[1] = root;
    data
}

#[test]
fn qualified_certificate_on_qscd_gives_qes() {
    let report = run(&qualified_data("2020-01-01T00:00:00Z"), &strict_policy());
    assert_eq!(report.indication, Indication::Passed);
    assert_eq!(report.qualification, SignatureQualification::Qes);
    let at_issuance = &report.blocks[1];
    assert_eq!(at_issuance.block, BlockId::QualCert);
    assert_eq!(at_issuance.reference_time, at("2023-01-01T00:00:00Z"));
    assert!(report.block(BlockId::QualSig).is_some_and(|b| b.is_passed()));
}

#[test]
fn qualification_granted_only_after_issuance_is_not_kept() {
    let report = run(&qualified_data("2024-01-01T00:00:00Z"), &strict_policy());
    assert_eq!(report.indication, Indication::Passed);
    assert_eq!(report.qualification, SignatureQualification::Ades);
    let qual_sig = report.block(BlockId::QualSig).expect("signature qualification");
    assert_eq!(
        qual_sig.constraint(ids::CHECK_QUAL_QUALIFICATION_CONSISTENT).map(|r| r.status),
        Some(adesval_types::ConstraintStatus::NotOk)
    );
}

#[test]
fn signatures_are_reported_in_input_order_and_deterministically() {
    let mut data = baseline();
    let mut second = data.signatures[0].clone();
    second.id = "S2".to_string();
    second.signature_intact = false;
    data.signatures.push(second);
    let policy = strict_policy();

    let first = validate(&data, &policy, at(VALIDATION_TIME));
    let again = validate(&data, &policy, at(VALIDATION_TIME));
    assert_eq!(first, again);
    let ids: Vec<&str> = first.iter().map(|r| r.signature_id.as_str()).collect();
    assert_eq!(ids, vec!["S1", "S2"]);
    assert_eq!(first[1].indication, Indication::Failed);
    assert_eq!(first[1].sub_indication, Some(SubIndication::SigCryptoFailure));
}
