use super::crypto::CryptoConstraintsCheck;
use super::{cv, erv, fc, isc, qual, rfc, sav, tsc, xcv};
use crate::check::{Check, EvidenceFault};
use crate::model::{
    DigestAlgorithm, DigestMatcherKind, EvidenceIndex, KeyUsage, ServiceQualifier, TimestampKind,
};
use crate::policy::CoverageMode;
use crate::test_support::{
    anchor, at, baseline, cert, matcher, ocsp, qualified, qualified_ca_service, revoked,
    rsa_sha256, signature, strict_policy, timestamp, tsa,
};
use adesval_types::{
    CertificateQualification, Conclusion, Indication, MessageTag, SubIndication, catalog,
};
use time::Duration;

#[test]
fn format_accepted_ignores_case_and_empty_list_accepts_all() {
    let accepted = vec!["PAdES-BASELINE-B".to_string()];
    let check = fc::FormatAccepted {
        format: "pades-baseline-b",
        accepted: &accepted,
    };
    assert_eq!(check.evaluate(), Ok(true));

    let check = fc::FormatAccepted {
        format: "CAdES-BES",
        accepted: &accepted,
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args, vec!["CAdES-BES".to_string()]);

    let check = fc::FormatAccepted {
        format: "anything",
        accepted: &[],
    };
    assert_eq!(check.evaluate(), Ok(true));
}

#[test]
fn signing_certificate_identified_reports_candidate_and_faults_on_dangling_id() {
    let mut data = baseline();
    let index = EvidenceIndex::new(&data);
    let sig = &data.signatures[0];
    let check = isc::SigningCertificateIdentified { token: sig, index: &index };
    assert_eq!(check.evaluate(), Ok(true));
    let infos = check.success_infos();
    assert_eq!(infos[0].tag, MessageTag::InfoSigningCertificateId);
    assert_eq!(infos[0].args, vec!["signer".to_string()]);

    data.signatures[0]
        .signing_certificate
        .as_mut()
        .expect("reference")
        .certificate_id = Some("ghost".to_string());
    let index = EvidenceIndex::new(&data);
    let check = isc::SigningCertificateIdentified {
        token: &data.signatures[0],
        index: &index,
    };
    assert_eq!(
        check.evaluate(),
        Err(EvidenceFault::UnknownCertificate {
            id: "ghost".to_string()
        })
    );
}

#[test]
fn signing_certificate_reference_checks_fail_without_reference() {
    assert_eq!(
        isc::SigningCertificateReferencePresent { reference: None }.evaluate(),
        Ok(false)
    );
    assert_eq!(
        isc::SigningCertificateDigestMatch { reference: None }.evaluate(),
        Ok(false)
    );
    assert_eq!(isc::IssuerSerialMatch { reference: None }.evaluate(), Ok(false));
}

#[test]
fn trust_anchor_reached_needs_a_trusted_element() {
    let data = baseline();
    let index = EvidenceIndex::new(&data);
    let chain = vec!["signer".to_string(), "root".to_string()];
    let check = xcv::TrustAnchorReached {
        token_id: "S1",
        chain: &chain,
        index: &index,
    };
    assert_eq!(check.evaluate(), Ok(true));
    assert_eq!(check.success_infos()[0].args, vec!["root".to_string()]);

    let chain = vec!["signer".to_string()];
    let check = xcv::TrustAnchorReached {
        token_id: "S1",
        chain: &chain,
        index: &index,
    };
    assert_eq!(check.evaluate(), Ok(false));
}

#[test]
fn validity_range_distinguishes_not_yet_valid_from_expired() {
    let c = cert("c", "2023-01-01T00:00:00Z", "2024-01-01T00:00:00Z");
    let good = ocsp("r", "c", "2023-06-01T00:00:00Z");

    let early = xcv::ValidityRange {
        cert: &c,
        latest_revocation: None,
        at: at("2022-01-01T00:00:00Z"),
    };
    assert_eq!(early.evaluate(), Ok(false));
    assert_eq!(early.failure_indication(), Indication::Failed);
    assert_eq!(early.failure_sub_indication(), SubIndication::NotYetValid);

    let late = xcv::ValidityRange {
        cert: &c,
        latest_revocation: Some(&good),
        at: at("2025-01-01T00:00:00Z"),
    };
    assert_eq!(late.failure_indication(), Indication::Indeterminate);
    assert_eq!(late.failure_sub_indication(), SubIndication::OutOfBoundsNotRevoked);

    let late_unknown = xcv::ValidityRange {
        cert: &c,
        latest_revocation: None,
        at: at("2025-01-01T00:00:00Z"),
    };
    assert_eq!(late_unknown.failure_sub_indication(), SubIndication::OutOfBoundsNoPoe);

    let boundary = xcv::ValidityRange {
        cert: &c,
        latest_revocation: None,
        at: at("2024-01-01T00:00:00Z"),
    };
    assert_eq!(boundary.evaluate(), Ok(true));
}

#[test]
fn not_revoked_depends_on_reference_time_and_role() {
    let c = cert("c", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z");
    let rev = revoked(ocsp("r", "c", "2024-12-31T00:00:00Z"), "2024-09-01T00:00:00Z");

    let before = xcv::NotRevoked {
        cert: &c,
        is_signing_certificate: true,
        latest_revocation: Some(&rev),
        at: at("2024-06-01T00:00:00Z"),
    };
    assert_eq!(before.evaluate(), Ok(true));
    assert_eq!(before.success_infos()[0].tag, MessageTag::InfoRevocationUsed);

    let after = xcv::NotRevoked {
        at: at("2025-01-01T00:00:00Z"),
        ..before
    };
    assert_eq!(after.evaluate(), Ok(false));
    assert_eq!(after.failure_sub_indication(), SubIndication::RevokedNoPoe);

    let ca = xcv::NotRevoked {
        is_signing_certificate: false,
        ..after
    };
    assert_eq!(ca.failure_sub_indication(), SubIndication::RevokedCaNoPoe);
}

#[test]
fn revoked_status_without_time_is_an_evidence_fault() {
    let c = cert("c", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z");
    let mut rev = ocsp("r", "c", "2024-12-31T00:00:00Z");
    rev.status = crate::model::RevocationStatus::Revoked;
    let check = xcv::NotRevoked {
        cert: &c,
        is_signing_certificate: true,
        latest_revocation: Some(&rev),
        at: at("2025-01-01T00:00:00Z"),
    };
    assert_eq!(
        check.evaluate(),
        Err(EvidenceFault::MissingRevocationTime {
            revocation_id: "r".to_string()
        })
    );
}

#[test]
fn trust_anchors_need_no_revocation_data() {
    let root = anchor("root");
    let check = xcv::RevocationDataPresent {
        cert: &root,
        revocations: &[],
    };
    assert_eq!(check.evaluate(), Ok(true));
    let check = xcv::RevocationFresh {
        cert: &root,
        rfc: None,
    };
    assert_eq!(check.evaluate(), Ok(true));
    assert!(check.child_report().is_none());

    let leaf = cert("c", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z");
    let check = xcv::RevocationDataPresent {
        cert: &leaf,
        revocations: &[],
    };
    assert_eq!(check.evaluate(), Ok(false));
}

#[test]
fn key_usage_and_timestamping_eku() {
    let c = cert("c", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z");
    let check = xcv::SigningKeyUsage {
        cert: &c,
        expected: &[KeyUsage::NonRepudiation],
    };
    assert_eq!(check.evaluate(), Ok(true));
    let check = xcv::SigningKeyUsage {
        cert: &c,
        expected: &[KeyUsage::KeyCertSign],
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args[1], "key_cert_sign");

    assert_eq!(xcv::TimestampingEku { cert: &c }.evaluate(), Ok(false));
    assert_eq!(xcv::TimestampingEku { cert: &tsa("t") }.evaluate(), Ok(true));
}

#[test]
fn revocation_freshness_with_and_without_max_age() {
    let rev = ocsp("r", "c", "2024-12-31T00:00:00Z");
    let check = rfc::RevocationFresh {
        revocation: &rev,
        max_age: None,
        at: at("2025-01-07T00:00:00Z"),
    };
    assert_eq!(check.evaluate(), Ok(true));
    let check = rfc::RevocationFresh {
        at: at("2025-01-08T00:00:00Z"),
        ..check
    };
    assert_eq!(check.evaluate(), Ok(false));

    let check = rfc::RevocationFresh {
        revocation: &rev,
        max_age: Some(Duration::days(1)),
        at: at("2025-01-02T00:00:00Z"),
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args.len(), 3);
}

#[test]
fn crypto_check_reports_expiry_and_violations() {
    let policy = strict_policy();
    let algorithm = rsa_sha256();
    let check = CryptoConstraintsCheck {
        descriptor: &catalog::SAV_CRYPTO_CONSTRAINTS,
        subject_id: "S1",
        algorithm: &algorithm,
        constraints: &policy.crypto,
        at: at("2025-01-01T00:00:00Z"),
    };
    assert_eq!(check.evaluate(), Ok(true));
    assert!(check.success_infos().is_empty());

    let mut sha1 = rsa_sha256();
    sha1.digest = DigestAlgorithm::Sha1;
    let check = CryptoConstraintsCheck {
        algorithm: &sha1,
        ..check
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args[0], "SHA1");

    let old = CryptoConstraintsCheck {
        at: at("2008-01-01T00:00:00Z"),
        ..check
    };
    assert_eq!(old.evaluate(), Ok(true));
    assert_eq!(old.success_infos()[0].tag, MessageTag::InfoAlgorithmExpires);
}

#[test]
fn reference_data_checks_distinguish_missing_list_from_empty_list() {
    let check = cv::ReferenceDataFound {
        token_id: "S1",
        matchers: None,
    };
    assert_eq!(
        check.evaluate(),
        Err(EvidenceFault::MissingDigestMatchers {
            token: "S1".to_string()
        })
    );
    let check = cv::ReferenceDataFound {
        token_id: "S1",
        matchers: Some(&[]),
    };
    assert_eq!(check.evaluate(), Ok(false));

    let mut altered = matcher(DigestMatcherKind::Reference);
    altered.data_intact = false;
    altered.name = Some("#doc".to_string());
    let list = [matcher(DigestMatcherKind::MessageDigest), altered];
    let check = cv::ReferenceDataIntact {
        token_id: "S1",
        matchers: Some(&list),
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args, vec!["#doc".to_string()]);
}

#[test]
fn signed_attribute_checks() {
    let list = [matcher(DigestMatcherKind::Reference)];
    let check = sav::MessageDigestOrSignedPropertiesPresent {
        token_id: "S1",
        matchers: Some(&list),
    };
    assert_eq!(check.evaluate(), Ok(false));
    let list = [matcher(DigestMatcherKind::SignedProperties)];
    let check = sav::MessageDigestOrSignedPropertiesPresent {
        token_id: "S1",
        matchers: Some(&list),
    };
    assert_eq!(check.evaluate(), Ok(true));
    assert_eq!(
        sav::ContentTypePresent { content_type: None }.evaluate(),
        Ok(false)
    );
    assert_eq!(
        sav::SigningTimePresent {
            claimed_signing_time: None
        }
        .evaluate(),
        Ok(false)
    );
}

#[test]
fn adjacent_coverage_tolerates_non_adjacent_gap_but_transitive_does_not() {
    // ATS3 covers ATS2 but not ATS1; ATS2 covers ATS1.
    let a1 = timestamp("ATS1", TimestampKind::Archive, "2021-01-01T00:00:00Z", &["tsa"], &["S1"]);
    let a2 = timestamp("ATS2", TimestampKind::Archive, "2022-01-01T00:00:00Z", &["tsa"], &["S1", "ATS1"]);
    let a3 = timestamp("ATS3", TimestampKind::Archive, "2023-01-01T00:00:00Z", &["tsa"], &["ATS2"]);

    let adjacent = erv::ArchiveTimestampsCoverEachOther::new(vec![&a3, &a1, &a2], CoverageMode::Adjacent);
    assert_eq!(adjacent.first_gap(), None);
    assert_eq!(adjacent.evaluate(), Ok(true));

    let transitive =
        erv::ArchiveTimestampsCoverEachOther::new(vec![&a3, &a1, &a2], CoverageMode::Transitive);
    assert_eq!(transitive.first_gap(), Some(("ATS3", "ATS1")));
    assert_eq!(transitive.evaluate(), Ok(false));
    assert_eq!(
        transitive.failure_message().args,
        vec!["ATS3".to_string(), "ATS1".to_string()]
    );
}

#[test]
fn adjacent_coverage_reports_the_first_broken_link() {
    let a1 = timestamp("ATS1", TimestampKind::Archive, "2021-01-01T00:00:00Z", &["tsa"], &["S1"]);
    let a2 = timestamp("ATS2", TimestampKind::Archive, "2022-01-01T00:00:00Z", &["tsa"], &["S1"]);
    let a3 = timestamp("ATS3", TimestampKind::Archive, "2023-01-01T00:00:00Z", &["tsa"], &["ATS1"]);
    let check = erv::ArchiveTimestampsCoverEachOther::new(vec![&a1, &a2, &a3], CoverageMode::Adjacent);
    assert_eq!(check.first_gap(), Some(("ATS2", "ATS1")));

    let single = erv::ArchiveTimestampsCoverEachOther::new(vec![&a1], CoverageMode::Transitive);
    assert_eq!(single.evaluate(), Ok(true));
}

#[test]
fn first_archive_timestamp_must_cover_the_signature() {
    let a1 = timestamp("ATS1", TimestampKind::Archive, "2021-01-01T00:00:00Z", &["tsa"], &["S9"]);
    let check = erv::FirstArchiveTimestampCoversSignature {
        signature_id: "S1",
        first: Some(&a1),
    };
    assert_eq!(check.evaluate(), Ok(false));
    let check = erv::FirstArchiveTimestampCoversSignature {
        signature_id: "S1",
        first: None,
    };
    assert_eq!(check.evaluate(), Ok(true));
}

#[test]
fn timestamp_order_allows_clock_skew() {
    let content = timestamp("CT", TimestampKind::Content, "2024-06-01T00:03:00Z", &["tsa"], &[]);
    let sig_ts = timestamp("TS1", TimestampKind::Signature, "2024-06-01T00:00:00Z", &["tsa"], &["S1"]);
    let check = tsc::TimestampOrder {
        timestamps: vec![&content, &sig_ts],
        clock_skew: Duration::minutes(5),
    };
    assert_eq!(check.evaluate(), Ok(true));
    let check = tsc::TimestampOrder {
        timestamps: vec![&content, &sig_ts],
        clock_skew: Duration::ZERO,
    };
    assert_eq!(check.first_inversion(), Some(("CT", "TS1")));
}

#[test]
fn signing_time_and_delay_against_best_signature_time() {
    let bst = at("2024-06-01T00:00:00Z");
    let check = tsc::SigningTimeBeforeBestSignatureTime {
        claimed_signing_time: Some(at("2024-06-01T00:04:00Z")),
        best_signature_time: bst,
        clock_skew: Duration::minutes(5),
    };
    assert_eq!(check.evaluate(), Ok(true));
    let check = tsc::SigningTimeBeforeBestSignatureTime {
        clock_skew: Duration::ZERO,
        ..check
    };
    assert_eq!(check.evaluate(), Ok(false));

    let check = tsc::TimestampDelay {
        claimed_signing_time: Some(at("2024-05-01T00:00:00Z")),
        best_signature_time: bst,
        delay: Some(Duration::days(1)),
    };
    assert_eq!(check.evaluate(), Ok(false));
    let check = tsc::TimestampDelay { delay: None, ..check };
    assert_eq!(check.evaluate(), Ok(true));
}

#[test]
fn time_windows_past_the_representable_range_are_unbounded() {
    let rev = ocsp("r", "c", "2024-12-31T00:00:00Z");
    let check = rfc::RevocationFresh {
        revocation: &rev,
        max_age: Some(Duration::MAX),
        at: at("2025-01-02T00:00:00Z"),
    };
    assert_eq!(check.evaluate(), Ok(true));

    let late = at("9999-12-31T23:59:00Z");
    let content = timestamp("CT", TimestampKind::Content, "9999-12-31T23:59:00Z", &["tsa"], &[]);
    let sig_ts = timestamp("TS1", TimestampKind::Signature, "9999-12-31T23:58:00Z", &["tsa"], &["S1"]);
    let check = tsc::TimestampOrder {
        timestamps: vec![&content, &sig_ts],
        clock_skew: Duration::minutes(5),
    };
    assert_eq!(check.evaluate(), Ok(true));

    let check = tsc::SigningTimeBeforeBestSignatureTime {
        claimed_signing_time: Some(late),
        best_signature_time: late,
        clock_skew: Duration::minutes(5),
    };
    assert_eq!(check.evaluate(), Ok(true));

    let check = tsc::TimestampDelay {
        claimed_signing_time: Some(late),
        best_signature_time: late,
        delay: Some(Duration::days(1)),
    };
    assert_eq!(check.evaluate(), Ok(true));
}

#[test]
fn certificate_qualification_follows_trusted_list_at_time() {
    let signer = qualified(cert("signer", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z"));
    let mut root = anchor("root");
    root.trusted_services.push(qualified_ca_service("2022-01-01T00:00:00Z"));
    let chain = [&signer, &root];

    let granted = qual::granted_services(&chain, at("2024-01-01T00:00:00Z"));
    assert_eq!(granted.len(), 1);
    assert_eq!(
        qual::qualification(&signer, &granted),
        CertificateQualification::QcForEsigQscd
    );

    let before_grant = qual::granted_services(&chain, at("2021-01-01T00:00:00Z"));
    assert!(before_grant.is_empty());
    assert_eq!(
        qual::qualification(&signer, &before_grant),
        CertificateQualification::NotQualified
    );
    assert_eq!(
        qual::ServiceGrantedAtTime {
            granted: &before_grant,
            at: at("2021-01-01T00:00:00Z"),
        }
        .evaluate(),
        Ok(false)
    );
}

#[test]
fn trusted_list_qualifiers_override_certificate_content() {
    let signer = qualified(cert("signer", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z"));
    let mut service = qualified_ca_service("2022-01-01T00:00:00Z");
    service.qualifiers.push(ServiceQualifier::NoQscd);
    let granted = [&service];
    assert_eq!(
        qual::qualification(&signer, &granted),
        CertificateQualification::QcForEsig
    );

    service.qualifiers = vec![ServiceQualifier::NotQualified];
    let granted = [&service];
    assert!(!qual::is_qc(&signer, &granted));
}

#[test]
fn signature_level_qualification_checks() {
    let failed = Conclusion::disqualified(Indication::Failed, SubIndication::HashFailure);
    assert_eq!(qual::IsAdes { long_term: &failed }.evaluate(), Ok(false));

    let check = qual::QualifiedAtBestSignatureTime {
        qualification: CertificateQualification::QcForEseal,
        best_signature_time: at("2024-06-01T00:00:00Z"),
    };
    assert_eq!(check.evaluate(), Ok(false));

    let check = qual::QualificationConsistent {
        at_issuance: CertificateQualification::QcForEsigQscd,
        at_best_signature_time: CertificateQualification::QcForEsig,
    };
    assert_eq!(check.evaluate(), Ok(false));
    assert_eq!(check.failure_message().args.len(), 2);
}

#[test]
fn signature_builder_is_self_consistent() {
    let sig = signature("S1", &["signer", "root"]);
    assert_eq!(
        sig.signing_certificate
            .as_ref()
            .and_then(|r| r.certificate_id.as_deref()),
        Some("signer")
    );
}
