//! Read-only evidence model ("diagnostic data").
//!
//! Produced upstream by the parsing and trust-list layers; cryptographic results arrive as
//! booleans. Cross references between objects are ids.

use crate::check::EvidenceFault;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticData {
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub validation_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub signatures: Vec<SignatureEvidence>,
    #[serde(default)]
    pub timestamps: Vec<TimestampEvidence>,
    #[serde(default)]
    pub certificates: Vec<CertificateEvidence>,
    #[serde(default)]
    pub revocations: Vec<RevocationEvidence>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignatureEvidence {
    pub id: String,
    /// e.g. `PAdES-BASELINE-LTA`.
    pub format: String,
    pub structurally_valid: bool,
    #[serde(default)]
    pub signing_certificate: Option<SigningCertificateRef>,
    /// Signing certificate first, trust anchor last.
    #[serde(default)]
    pub certificate_chain: Vec<String>,
    /// `None` means the parsing layer did not supply the list at all.
    #[serde(default)]
    pub digest_matchers: Option<Vec<DigestMatcher>>,
    pub signature_intact: bool,
    pub algorithm: AlgorithmEvidence,
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub claimed_signing_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub timestamp_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SigningCertificateRef {
    /// Resolved candidate, if any.
    #[serde(default)]
    pub certificate_id: Option<String>,
    pub attribute_present: bool,
    pub digest_match: bool,
    pub issuer_serial_match: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DigestMatcherKind {
    MessageDigest,
    SignedProperties,
    Reference,
    Object,
    Manifest,
    MessageImprint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DigestMatcher {
    pub kind: DigestMatcherKind,
    #[serde(default)]
    pub name: Option<String>,
    pub data_found: bool,
    pub data_intact: bool,
}

impl DigestMatcher {
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:?}", self.kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    Content,
    Signature,
    Archive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignedObjectCategory {
    Signature,
    Timestamp,
    Certificate,
    Revocation,
    SignedData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignedObject {
    pub id: String,
    pub category: SignedObjectCategory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimestampEvidence {
    pub id: String,
    pub kind: TimestampKind,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub production_time: OffsetDateTime,
    /// The message imprint is reported as a `message_imprint` digest matcher.
    #[serde(default)]
    pub digest_matchers: Option<Vec<DigestMatcher>>,
    pub signature_intact: bool,
    #[serde(default)]
    pub signing_certificate: Option<SigningCertificateRef>,
    #[serde(default)]
    pub certificate_chain: Vec<String>,
    pub algorithm: AlgorithmEvidence,
    #[serde(default)]
    pub signed_objects: Vec<SignedObject>,
}

impl TimestampEvidence {
    pub fn covers(&self, id: &str) -> bool {
        self.signed_objects.iter().any(|o| o.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KeyUsage {
    DigitalSignature,
    NonRepudiation,
    KeyEncipherment,
    DataEncipherment,
    KeyAgreement,
    KeyCertSign,
    CrlSign,
}

impl KeyUsage {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyUsage::DigitalSignature => "digital_signature",
            KeyUsage::NonRepudiation => "non_repudiation",
            KeyUsage::KeyEncipherment => "key_encipherment",
            KeyUsage::DataEncipherment => "data_encipherment",
            KeyUsage::KeyAgreement => "key_agreement",
            KeyUsage::KeyCertSign => "key_cert_sign",
            KeyUsage::CrlSign => "crl_sign",
        }
    }

    const ALL: [KeyUsage; 7] = [
        KeyUsage::DigitalSignature,
        KeyUsage::NonRepudiation,
        KeyUsage::KeyEncipherment,
        KeyUsage::DataEncipherment,
        KeyUsage::KeyAgreement,
        KeyUsage::KeyCertSign,
        KeyUsage::CrlSign,
    ];
}

impl FromStr for KeyUsage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyUsage::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown key usage '{s}'"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QcType {
    Esign,
    Eseal,
    Web,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QcStatements {
    #[serde(default)]
    pub compliance: bool,
    #[serde(default)]
    pub qscd: bool,
    #[serde(default)]
    pub types: Vec<QcType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Granted,
    Withdrawn,
    Recognized,
    Deprecated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceStatusPeriod {
    pub status: ServiceStatus,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end: Option<OffsetDateTime>,
}

impl ServiceStatusPeriod {
    pub fn contains(&self, t: OffsetDateTime) -> bool {
        self.start <= t && self.end.is_none_or(|end| t < end)
    }
}

/// Trusted-list qualifiers that override or complete certificate content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceQualifier {
    QcStatement,
    NotQualified,
    QcForEsig,
    QcForEseal,
    QcForWeb,
    Qscd,
    NoQscd,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrustedServiceEvidence {
    pub service_name: String,
    /// Service type URI.
    pub service_type: String,
    #[serde(default)]
    pub statuses: Vec<ServiceStatusPeriod>,
    #[serde(default)]
    pub qualifiers: Vec<ServiceQualifier>,
}

impl TrustedServiceEvidence {
    pub fn is_qc_ca(&self) -> bool {
        self.service_type.ends_with("/CA/QC")
    }

    pub fn granted_at(&self, t: OffsetDateTime) -> bool {
        self.statuses
            .iter()
            .any(|p| p.status == ServiceStatus::Granted && p.contains(t))
    }

    pub fn has(&self, qualifier: ServiceQualifier) -> bool {
        self.qualifiers.contains(&qualifier)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateEvidence {
    pub id: String,
    pub subject: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub not_before: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub not_after: OffsetDateTime,
    #[serde(default)]
    pub self_signed: bool,
    /// Trust anchor (from a trusted list or the local trust store).
    #[serde(default)]
    pub trusted: bool,
    pub signature_intact: bool,
    pub algorithm: AlgorithmEvidence,
    #[serde(default)]
    pub key_usage: Vec<KeyUsage>,
    #[serde(default)]
    pub extended_key_usage: Vec<String>,
    #[serde(default)]
    pub ocsp_no_check: bool,
    #[serde(default)]
    pub qc_statements: QcStatements,
    #[serde(default)]
    pub trusted_services: Vec<TrustedServiceEvidence>,
}

pub const EKU_TIME_STAMPING: &str = "time_stamping";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RevocationKind {
    Crl,
    Ocsp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RevocationStatus {
    Good,
    Revoked,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RevocationEvidence {
    pub id: String,
    pub certificate_id: String,
    pub kind: RevocationKind,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub this_update: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_update: Option<OffsetDateTime>,
    pub status: RevocationStatus,
    /// Required when `status` is `revoked`.
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub revocation_time: Option<OffsetDateTime>,
    pub signature_intact: bool,
}

impl RevocationEvidence {
    /// Revocation time when the status is `revoked`; a missing time is a contract violation.
    pub fn revoked_at(&self) -> Result<Option<OffsetDateTime>, EvidenceFault> {
        match (self.status, self.revocation_time) {
            (RevocationStatus::Revoked, Some(t)) => Ok(Some(t)),
            (RevocationStatus::Revoked, None) => Err(EvidenceFault::MissingRevocationTime {
                revocation_id: self.id.clone(),
            }),
            _ => Ok(None),
        }
    }
}

macro_rules! algorithm_names {
    ($name:ident { $( $variant:ident => $text:literal, )+ }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|a| a.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown algorithm '{s}'"))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

algorithm_names!(DigestAlgorithm {
    Md5 => "MD5",
    Sha1 => "SHA1",
    Sha224 => "SHA224",
    Sha256 => "SHA256",
    Sha384 => "SHA384",
    Sha512 => "SHA512",
    Sha3_256 => "SHA3-256",
    Sha3_384 => "SHA3-384",
    Sha3_512 => "SHA3-512",
    Ripemd160 => "RIPEMD160",
});

algorithm_names!(EncryptionAlgorithm {
    Rsa => "RSA",
    RsaPss => "RSASSA-PSS",
    Dsa => "DSA",
    Ecdsa => "ECDSA",
    Eddsa => "EDDSA",
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AlgorithmEvidence {
    pub digest: DigestAlgorithm,
    pub encryption: EncryptionAlgorithm,
    pub key_length: u32,
}

impl fmt::Display for AlgorithmEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}with{} ({} bits)", self.digest, self.encryption, self.key_length)
    }
}

/// Whether a token is a signature or a time-stamp; building blocks differ slightly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Signature,
    Timestamp,
}

/// Common view over signatures and time-stamps.
pub trait Token: Sync {
    fn id(&self) -> &str;
    fn kind(&self) -> TokenKind;
    fn signing_certificate(&self) -> Option<&SigningCertificateRef>;
    fn certificate_chain(&self) -> &[String];
    fn digest_matchers(&self) -> Option<&[DigestMatcher]>;
    fn signature_intact(&self) -> bool;
    fn algorithm(&self) -> &AlgorithmEvidence;
}

impl Token for SignatureEvidence {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Signature
    }

    fn signing_certificate(&self) -> Option<&SigningCertificateRef> {
        self.signing_certificate.as_ref()
    }

    fn certificate_chain(&self) -> &[String] {
        &self.certificate_chain
    }

    fn digest_matchers(&self) -> Option<&[DigestMatcher]> {
        self.digest_matchers.as_deref()
    }

    fn signature_intact(&self) -> bool {
        self.signature_intact
    }

    fn algorithm(&self) -> &AlgorithmEvidence {
        &self.algorithm
    }
}

impl Token for TimestampEvidence {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Timestamp
    }

    fn signing_certificate(&self) -> Option<&SigningCertificateRef> {
        self.signing_certificate.as_ref()
    }

    fn certificate_chain(&self) -> &[String] {
        &self.certificate_chain
    }

    fn digest_matchers(&self) -> Option<&[DigestMatcher]> {
        self.digest_matchers.as_deref()
    }

    fn signature_intact(&self) -> bool {
        self.signature_intact
    }

    fn algorithm(&self) -> &AlgorithmEvidence {
        &self.algorithm
    }
}

/// Id lookups over one [`DiagnosticData`]. Built once per run and shared read-only.
#[derive(Debug)]
pub struct EvidenceIndex<'a> {
    certificates: BTreeMap<&'a str, &'a CertificateEvidence>,
    timestamps: BTreeMap<&'a str, &'a TimestampEvidence>,
    revocations: BTreeMap<&'a str, Vec<&'a RevocationEvidence>>,
    /// Ids carried by more than one certificate or time-stamp; resolving them is a fault.
    ambiguous_certificates: BTreeSet<&'a str>,
    ambiguous_timestamps: BTreeSet<&'a str>,
}

impl<'a> EvidenceIndex<'a> {
    pub fn new(data: &'a DiagnosticData) -> Self {
        let mut certificates = BTreeMap::new();
        let mut ambiguous_certificates = BTreeSet::new();
        for cert in &data.certificates {
            if certificates.insert(cert.id.as_str(), cert).is_some() {
                tracing::warn!(certificate = %cert.id, "duplicate certificate id");
                ambiguous_certificates.insert(cert.id.as_str());
            }
        }
        let mut timestamps = BTreeMap::new();
        let mut ambiguous_timestamps = BTreeSet::new();
        for ts in &data.timestamps {
            if timestamps.insert(ts.id.as_str(), ts).is_some() {
                tracing::warn!(timestamp = %ts.id, "duplicate timestamp id");
                ambiguous_timestamps.insert(ts.id.as_str());
            }
        }
        let mut revocations: BTreeMap<&str, Vec<&RevocationEvidence>> = BTreeMap::new();
        for rev in &data.revocations {
            revocations
                .entry(rev.certificate_id.as_str())
                .or_default()
                .push(rev);
        }
        for list in revocations.values_mut() {
            list.sort_by(|a, b| a.this_update.cmp(&b.this_update).then(a.id.cmp(&b.id)));
        }
        Self {
            certificates,
            timestamps,
            revocations,
            ambiguous_certificates,
            ambiguous_timestamps,
        }
    }

    pub fn certificate(&self, id: &str) -> Result<&'a CertificateEvidence, EvidenceFault> {
        if self.ambiguous_certificates.contains(id) {
            return Err(EvidenceFault::DuplicateCertificate { id: id.to_string() });
        }
        self.certificates
            .get(id)
            .copied()
            .ok_or_else(|| EvidenceFault::UnknownCertificate { id: id.to_string() })
    }

    pub fn timestamp(&self, id: &str) -> Result<&'a TimestampEvidence, EvidenceFault> {
        if self.ambiguous_timestamps.contains(id) {
            return Err(EvidenceFault::DuplicateTimestamp { id: id.to_string() });
        }
        self.timestamps
            .get(id)
            .copied()
            .ok_or_else(|| EvidenceFault::UnknownTimestamp { id: id.to_string() })
    }

    /// Revocation data for a certificate, oldest first.
    pub fn revocations_for(&self, certificate_id: &str) -> &[&'a RevocationEvidence] {
        self.revocations
            .get(certificate_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn latest_revocation(&self, certificate_id: &str) -> Option<&'a RevocationEvidence> {
        self.revocations_for(certificate_id).last().copied()
    }

    /// Resolves a token's chain, signing certificate first.
    pub fn chain(&self, token: &dyn Token) -> Result<Vec<&'a CertificateEvidence>, EvidenceFault> {
        token
            .certificate_chain()
            .iter()
            .map(|id| self.certificate(id))
            .collect()
    }

    /// The resolved signing certificate, `Ok(None)` when no candidate was identified.
    pub fn signing_certificate(
        &self,
        token: &dyn Token,
    ) -> Result<Option<&'a CertificateEvidence>, EvidenceFault> {
        match token.signing_certificate().and_then(|r| r.certificate_id.as_deref()) {
            Some(id) => self.certificate(id).map(Some),
            None => Ok(None),
        }
    }
}
