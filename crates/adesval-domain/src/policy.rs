use crate::model::{AlgorithmEvidence, DigestAlgorithm, EncryptionAlgorithm, KeyUsage};
use adesval_types::ConstraintLevel;
use std::collections::BTreeMap;
use time::{Duration, OffsetDateTime};

/// How archive time-stamps must reference earlier archive time-stamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoverageMode {
    /// Each archive time-stamp covers its immediate predecessor.
    #[default]
    Adjacent,
    /// Each archive time-stamp covers every earlier one.
    Transitive,
}

/// Accepted algorithms with optional expiration, plus key-size floors.
#[derive(Clone, Debug, Default)]
pub struct CryptoConstraints {
    pub digest_algorithms: BTreeMap<DigestAlgorithm, Option<OffsetDateTime>>,
    pub encryption_algorithms: BTreeMap<EncryptionAlgorithm, Option<OffsetDateTime>>,
    pub min_key_sizes: BTreeMap<EncryptionAlgorithm, u32>,
}

/// Why an algorithm was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoViolation {
    DigestNotAccepted(DigestAlgorithm),
    DigestExpired(DigestAlgorithm, OffsetDateTime),
    EncryptionNotAccepted(EncryptionAlgorithm),
    EncryptionExpired(EncryptionAlgorithm, OffsetDateTime),
    KeyTooSmall {
        algorithm: EncryptionAlgorithm,
        actual: u32,
        minimum: u32,
    },
}

impl CryptoViolation {
    /// Name of the offending algorithm, used as a message argument.
    pub fn algorithm_label(&self) -> String {
        match self {
            CryptoViolation::DigestNotAccepted(d) | CryptoViolation::DigestExpired(d, _) => {
                d.to_string()
            }
            CryptoViolation::EncryptionNotAccepted(e)
            | CryptoViolation::EncryptionExpired(e, _) => e.to_string(),
            CryptoViolation::KeyTooSmall {
                algorithm, actual, ..
            } => format!("{algorithm} {actual}"),
        }
    }
}

impl CryptoConstraints {
    /// Checks `alg` at `at`. On success returns the earliest expiration among the algorithms
    /// used, if any.
    pub fn evaluate(
        &self,
        alg: &AlgorithmEvidence,
        at: OffsetDateTime,
    ) -> Result<Option<OffsetDateTime>, CryptoViolation> {
        let digest_expiry = match self.digest_algorithms.get(&alg.digest) {
            None => return Err(CryptoViolation::DigestNotAccepted(alg.digest)),
            Some(Some(expiry)) if *expiry <= at => {
                return Err(CryptoViolation::DigestExpired(alg.digest, *expiry));
            }
            Some(expiry) => *expiry,
        };
        let encryption_expiry = match self.encryption_algorithms.get(&alg.encryption) {
            None => return Err(CryptoViolation::EncryptionNotAccepted(alg.encryption)),
            Some(Some(expiry)) if *expiry <= at => {
                return Err(CryptoViolation::EncryptionExpired(alg.encryption, *expiry));
            }
            Some(expiry) => *expiry,
        };
        if let Some(minimum) = self.min_key_sizes.get(&alg.encryption)
            && alg.key_length < *minimum
        {
            return Err(CryptoViolation::KeyTooSmall {
                algorithm: alg.encryption,
                actual: alg.key_length,
                minimum: *minimum,
            });
        }
        Ok(match (digest_expiry, encryption_expiry) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        })
    }
}

/// Resolved, immutable validation policy. Shared by reference across every chain of a run.
#[derive(Clone, Debug)]
pub struct ValidationPolicy {
    pub name: String,
    /// Constraint level per check id. Checks absent from the map are ignored.
    pub levels: BTreeMap<String, ConstraintLevel>,
    /// Empty accepts every format.
    pub accepted_formats: Vec<String>,
    pub crypto: CryptoConstraints,
    pub clock_skew: Duration,
    pub timestamp_delay: Option<Duration>,
    /// `None`: revocation data is fresh until its next update.
    pub revocation_max_age: Option<Duration>,
    pub archive_coverage: CoverageMode,
    /// Empty disables the key-usage requirement.
    pub expected_key_usage: Vec<KeyUsage>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            name: "empty".to_string(),
            levels: BTreeMap::new(),
            accepted_formats: Vec::new(),
            crypto: CryptoConstraints::default(),
            clock_skew: Duration::ZERO,
            timestamp_delay: None,
            revocation_max_age: None,
            archive_coverage: CoverageMode::Adjacent,
            expected_key_usage: Vec::new(),
        }
    }
}

impl ValidationPolicy {
    pub fn level(&self, check_id: &str) -> ConstraintLevel {
        self.levels
            .get(check_id)
            .copied()
            .unwrap_or(ConstraintLevel::Ignore)
    }

    pub fn snapshot(&self, reference_time: OffsetDateTime) -> PolicySnapshot<'_> {
        PolicySnapshot {
            policy: self,
            reference_time,
        }
    }
}

/// A policy bound to the reference instant of one chain execution.
#[derive(Clone, Copy, Debug)]
pub struct PolicySnapshot<'p> {
    pub policy: &'p ValidationPolicy,
    pub reference_time: OffsetDateTime,
}

impl<'p> PolicySnapshot<'p> {
    pub fn level(&self, check_id: &str) -> ConstraintLevel {
        self.policy.level(check_id)
    }

    /// Same policy, different reference instant.
    pub fn at(&self, reference_time: OffsetDateTime) -> PolicySnapshot<'p> {
        PolicySnapshot {
            policy: self.policy,
            reference_time,
        }
    }
}
