use adesval_domain::model::{DigestAlgorithm, EncryptionAlgorithm, KeyUsage};
use adesval_domain::policy::{CoverageMode, CryptoConstraints, ValidationPolicy};
use adesval_types::{BlockId, CheckDescriptor, ConstraintLevel, catalog, ids};
use std::collections::BTreeMap;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const DEFAULT_PROFILE: &str = "strict";
pub const PROFILES: &[&str] = &["strict", "lenient", "basic"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything specific should go into the policy document.
pub fn preset(profile: &str) -> Option<ValidationPolicy> {
    match profile {
        "strict" => Some(strict_profile()),
        "lenient" => Some(lenient_profile()),
        "basic" => Some(basic_profile()),
        _ => None,
    }
}

fn strict_profile() -> ValidationPolicy {
    ValidationPolicy {
        name: "strict".to_string(),
        levels: levels(|d| match d.block {
            BlockId::QualCert | BlockId::QualSig => ConstraintLevel::Warn,
            _ => ConstraintLevel::Enforced,
        }),
        accepted_formats: Vec::new(),
        crypto: crypto(2048),
        clock_skew: Duration::minutes(5),
        timestamp_delay: None,
        revocation_max_age: None,
        archive_coverage: CoverageMode::Adjacent,
        expected_key_usage: vec![KeyUsage::NonRepudiation, KeyUsage::DigitalSignature],
    }
}

/// Only what proves integrity and identity is enforced; the rest is advisory.
fn lenient_profile() -> ValidationPolicy {
    let enforced = [
        ids::CHECK_FC_STRUCTURE_VALID,
        ids::CHECK_ISC_SIGNING_CERTIFICATE_IDENTIFIED,
        ids::CHECK_XCV_CHAIN_PRESENT,
        ids::CHECK_XCV_TRUST_ANCHOR_REACHED,
        ids::CHECK_SUB_XCV_SIGNATURE_INTACT,
        ids::CHECK_SUB_XCV_NOT_REVOKED,
        ids::CHECK_SUB_XCV_VALIDITY_RANGE,
        ids::CHECK_CV_REFERENCE_DATA_FOUND,
        ids::CHECK_CV_REFERENCE_DATA_INTACT,
        ids::CHECK_CV_SIGNATURE_INTACT,
        ids::CHECK_SAV_CRYPTO_CONSTRAINTS,
        ids::CHECK_SUB_XCV_CRYPTO_CONSTRAINTS,
        ids::CHECK_ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER,
        ids::CHECK_ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE,
    ];
    ValidationPolicy {
        name: "lenient".to_string(),
        levels: levels(|d| match d.block {
            BlockId::QualCert | BlockId::QualSig => ConstraintLevel::Inform,
            _ if enforced.contains(&d.id) => ConstraintLevel::Enforced,
            _ => ConstraintLevel::Warn,
        }),
        crypto: crypto(1024),
        clock_skew: Duration::minutes(10),
        expected_key_usage: Vec::new(),
        ..strict_profile()
    }
}

/// Basic signatures only: no archive chain, coherence or qualification constraints, and
/// revocation problems are reported as warnings.
fn basic_profile() -> ValidationPolicy {
    ValidationPolicy {
        name: "basic".to_string(),
        levels: levels(|d| match d.block {
            BlockId::Erv | BlockId::Tsc | BlockId::QualCert | BlockId::QualSig => {
                ConstraintLevel::Ignore
            }
            BlockId::Rfc => ConstraintLevel::Warn,
            _ if d.id == ids::CHECK_SUB_XCV_REVOCATION_DATA_PRESENT
                || d.id == ids::CHECK_SUB_XCV_REVOCATION_FRESH =>
            {
                ConstraintLevel::Warn
            }
            _ => ConstraintLevel::Enforced,
        }),
        ..strict_profile()
    }
}

fn levels(level_for: impl Fn(&CheckDescriptor) -> ConstraintLevel) -> BTreeMap<String, ConstraintLevel> {
    catalog::CATALOG
        .iter()
        .filter(|d| d.configurable)
        .map(|d| (d.id.to_string(), level_for(d)))
        .collect()
}

const SHA1_EXPIRY: OffsetDateTime = datetime!(2009-01-01 00:00 UTC);
const SHA224_EXPIRY: OffsetDateTime = datetime!(2029-01-01 00:00 UTC);
const DSA_EXPIRY: OffsetDateTime = datetime!(2023-01-01 00:00 UTC);

fn crypto(min_rsa: u32) -> CryptoConstraints {
    let mut c = CryptoConstraints::default();
    c.digest_algorithms.insert(DigestAlgorithm::Sha1, Some(SHA1_EXPIRY));
    c.digest_algorithms.insert(DigestAlgorithm::Sha224, Some(SHA224_EXPIRY));
    for d in [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Sha3_256,
        DigestAlgorithm::Sha3_384,
        DigestAlgorithm::Sha3_512,
    ] {
        c.digest_algorithms.insert(d, None);
    }
    for e in [
        EncryptionAlgorithm::Rsa,
        EncryptionAlgorithm::RsaPss,
        EncryptionAlgorithm::Ecdsa,
        EncryptionAlgorithm::Eddsa,
    ] {
        c.encryption_algorithms.insert(e, None);
    }
    c.encryption_algorithms
        .insert(EncryptionAlgorithm::Dsa, Some(DSA_EXPIRY));
    c.min_key_sizes.insert(EncryptionAlgorithm::Rsa, min_rsa);
    c.min_key_sizes.insert(EncryptionAlgorithm::RsaPss, min_rsa);
    c.min_key_sizes.insert(EncryptionAlgorithm::Ecdsa, 256);
    c
}
