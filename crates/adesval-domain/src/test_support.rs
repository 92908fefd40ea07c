use crate::check::{Check, EvidenceFault};
use crate::model::{
    AlgorithmEvidence, CertificateEvidence, DiagnosticData, DigestAlgorithm, DigestMatcher,
    DigestMatcherKind, EKU_TIME_STAMPING, EncryptionAlgorithm, KeyUsage, QcStatements, QcType,
    RevocationEvidence, RevocationKind, RevocationStatus, ServiceQualifier, ServiceStatus,
    ServiceStatusPeriod, SignatureEvidence, SignedObject, SignedObjectCategory,
    SigningCertificateRef, TimestampEvidence, TimestampKind, TrustedServiceEvidence,
};
use crate::policy::{CryptoConstraints, ValidationPolicy};
use adesval_types::{CheckDescriptor, ConstraintLevel, catalog};
use std::collections::BTreeMap;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

pub fn at(s: &str) -> OffsetDateTime {
    OffsetDateTime::parse(s, &Rfc3339).expect("test instant must be RFC 3339")
}

/// A check with a fixed outcome.
pub struct Scripted {
    descriptor: &'static CheckDescriptor,
    outcome: Result<bool, EvidenceFault>,
}

impl Scripted {
    pub fn pass(descriptor: &'static CheckDescriptor) -> Self {
        Self {
            descriptor,
            outcome: Ok(true),
        }
    }

    pub fn fail(descriptor: &'static CheckDescriptor) -> Self {
        Self {
            descriptor,
            outcome: Ok(false),
        }
    }

    pub fn fault(descriptor: &'static CheckDescriptor) -> Self {
        Self {
            descriptor,
            outcome: Err(EvidenceFault::Inconsistent("scripted".to_string())),
        }
    }
}

impl Check for Scripted {
    fn descriptor(&self) -> &'static CheckDescriptor {
        self.descriptor
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        self.outcome.clone()
    }
}

/// Every configurable check at ENFORCED, SHA-2 and RSA/ECDSA accepted without expiry.
pub fn strict_policy() -> ValidationPolicy {
    let levels: BTreeMap<String, ConstraintLevel> = catalog::CATALOG
        .iter()
        .filter(|d| d.configurable)
        .map(|d| (d.id.to_string(), ConstraintLevel::Enforced))
        .collect();
    let mut crypto = CryptoConstraints::default();
    for d in [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ] {
        crypto.digest_algorithms.insert(d, None);
    }
    crypto
        .digest_algorithms
        .insert(DigestAlgorithm::Sha1, Some(at("2009-01-01T00:00:00Z")));
    crypto.encryption_algorithms.insert(EncryptionAlgorithm::Rsa, None);
    crypto.encryption_algorithms.insert(EncryptionAlgorithm::Ecdsa, None);
    crypto.min_key_sizes.insert(EncryptionAlgorithm::Rsa, 2048);
    ValidationPolicy {
        name: "test".to_string(),
        levels,
        crypto,
        clock_skew: Duration::minutes(5),
        ..ValidationPolicy::default()
    }
}

pub fn with_level(mut policy: ValidationPolicy, id: &str, level: ConstraintLevel) -> ValidationPolicy {
    policy.levels.insert(id.to_string(), level);
    policy
}

pub fn rsa_sha256() -> AlgorithmEvidence {
    AlgorithmEvidence {
        digest: DigestAlgorithm::Sha256,
        encryption: EncryptionAlgorithm::Rsa,
        key_length: 2048,
    }
}

pub fn cert(id: &str, not_before: &str, not_after: &str) -> CertificateEvidence {
    CertificateEvidence {
        id: id.to_string(),
        subject: format!("CN={id}"),
        not_before: at(not_before),
        not_after: at(not_after),
        self_signed: false,
        trusted: false,
        signature_intact: true,
        algorithm: rsa_sha256(),
        key_usage: vec![KeyUsage::DigitalSignature, KeyUsage::NonRepudiation],
        extended_key_usage: Vec::new(),
        ocsp_no_check: false,
        qc_statements: QcStatements::default(),
        trusted_services: Vec::new(),
    }
}

pub fn anchor(id: &str) -> CertificateEvidence {
    CertificateEvidence {
        self_signed: true,
        trusted: true,
        key_usage: vec![KeyUsage::KeyCertSign, KeyUsage::CrlSign],
        ..cert(id, "2015-01-01T00:00:00Z", "2035-01-01T00:00:00Z")
    }
}

pub fn tsa(id: &str) -> CertificateEvidence {
    CertificateEvidence {
        extended_key_usage: vec![EKU_TIME_STAMPING.to_string()],
        ..cert(id, "2020-01-01T00:00:00Z", "2030-01-01T00:00:00Z")
    }
}

/// A granted QC CA service for eSig with QSCD, listed on `cert`.
pub fn qualified_ca_service(granted_from: &str) -> TrustedServiceEvidence {
    TrustedServiceEvidence {
        service_name: "Test QTSP".to_string(),
        service_type: "http://uri.etsi.org/TrstSvc/Svctype/CA/QC".to_string(),
        statuses: vec![ServiceStatusPeriod {
            status: ServiceStatus::Granted,
            start: at(granted_from),
            end: None,
        }],
        qualifiers: vec![ServiceQualifier::QcForEsig],
    }
}

pub fn qualified(mut cert: CertificateEvidence) -> CertificateEvidence {
    cert.qc_statements = QcStatements {
        compliance: true,
        qscd: true,
        types: vec![QcType::Esign],
    };
    cert
}

pub fn ocsp(id: &str, certificate_id: &str, this_update: &str) -> RevocationEvidence {
    let this_update = at(this_update);
    RevocationEvidence {
        id: id.to_string(),
        certificate_id: certificate_id.to_string(),
        kind: RevocationKind::Ocsp,
        this_update,
        next_update: Some(this_update + Duration::days(7)),
        status: RevocationStatus::Good,
        revocation_time: None,
        signature_intact: true,
    }
}

pub fn revoked(mut rev: RevocationEvidence, revocation_time: &str) -> RevocationEvidence {
    rev.status = RevocationStatus::Revoked;
    rev.revocation_time = Some(at(revocation_time));
    rev
}

fn signing_ref(certificate_id: Option<&str>) -> SigningCertificateRef {
    SigningCertificateRef {
        certificate_id: certificate_id.map(str::to_string),
        attribute_present: true,
        digest_match: true,
        issuer_serial_match: true,
    }
}

pub fn matcher(kind: DigestMatcherKind) -> DigestMatcher {
    DigestMatcher {
        kind,
        name: None,
        data_found: true,
        data_intact: true,
    }
}

pub fn signature(id: &str, chain: &[&str]) -> SignatureEvidence {
    SignatureEvidence {
        id: id.to_string(),
        format: "PAdES-BASELINE-B".to_string(),
        structurally_valid: true,
        signing_certificate: Some(signing_ref(chain.first().copied())),
        certificate_chain: chain.iter().map(|c| c.to_string()).collect(),
        digest_matchers: Some(vec![matcher(DigestMatcherKind::MessageDigest)]),
        signature_intact: true,
        algorithm: rsa_sha256(),
        claimed_signing_time: Some(at("2024-05-31T23:58:00Z")),
        content_type: Some("application/pdf".to_string()),
        timestamp_ids: Vec::new(),
    }
}

pub fn timestamp(
    id: &str,
    kind: TimestampKind,
    production_time: &str,
    chain: &[&str],
    covers: &[&str],
) -> TimestampEvidence {
    TimestampEvidence {
        id: id.to_string(),
        kind,
        production_time: at(production_time),
        digest_matchers: Some(vec![matcher(DigestMatcherKind::MessageImprint)]),
        signature_intact: true,
        signing_certificate: Some(signing_ref(chain.first().copied())),
        certificate_chain: chain.iter().map(|c| c.to_string()).collect(),
        algorithm: rsa_sha256(),
        signed_objects: covers
            .iter()
            .map(|id| SignedObject {
                id: id.to_string(),
                category: if id.starts_with("ATS") {
                    SignedObjectCategory::Timestamp
                } else {
                    SignedObjectCategory::Signature
                },
            })
            .collect(),
    }
}

pub const VALIDATION_TIME: &str = "2025-01-01T00:00:00Z";

/// One signature `S1` by `signer` under the trusted `root`, OCSP good just before the
/// validation time, plus a time-stamping unit `tsa` under the same root.
pub fn baseline() -> DiagnosticData {
    DiagnosticData {
        validation_time: Some(at(VALIDATION_TIME)),
        signatures: vec![signature("S1", &["signer", "root"])],
        timestamps: Vec::new(),
        certificates: vec![
            cert("signer", "2023-01-01T00:00:00Z", "2026-01-01T00:00:00Z"),
            anchor("root"),
            tsa("tsa"),
        ],
        revocations: vec![
            ocsp("ocsp-signer", "signer", "2024-12-31T12:00:00Z"),
            ocsp("ocsp-tsa", "tsa", "2024-12-31T12:00:00Z"),
        ],
    }
}

/// Adds a signature time-stamp `TS1` over `S1` produced at `production_time`.
pub fn with_signature_timestamp(mut data: DiagnosticData, production_time: &str) -> DiagnosticData {
    data.timestamps.push(timestamp(
        "TS1",
        TimestampKind::Signature,
        production_time,
        &["tsa", "root"],
        &["S1"],
    ));
    data.signatures[0].timestamp_ids.push("TS1".to_string());
    data
}
