//! Static descriptor for every concrete check.
//!
//! The catalog ties a stable check id to its block, its two message tags and the verdict it
//! produces when it fails at `ENFORCED` level. Policy resolution rejects ids not listed here.

use crate::block::BlockId;
use crate::ids;
use crate::indication::{Indication, SubIndication};
use crate::message::MessageTag;

#[derive(Debug, PartialEq, Eq)]
pub struct CheckDescriptor {
    pub id: &'static str,
    pub block: BlockId,
    pub title: &'static str,
    pub description: &'static str,
    /// "What is being checked".
    pub question: MessageTag,
    /// "Why it failed".
    pub failure: MessageTag,
    pub indication: Indication,
    /// Every sub-indication the check can report; the first one is the usual value.
    pub sub_indications: &'static [SubIndication],
    /// `false` when the level is fixed by the process and cannot be set by policy.
    pub configurable: bool,
}

impl CheckDescriptor {
    pub fn sub_indication(&self) -> SubIndication {
        self.sub_indications[0]
    }
}

use Indication::{Failed, Indeterminate};
use SubIndication as S;

pub static FC_FORMAT_ACCEPTED: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_FC_FORMAT_ACCEPTED,
    block: BlockId::Fc,
    title: "Signature format accepted",
    description: "The signature format (e.g. PAdES-BASELINE-B) is in the policy's accepted list. \
An empty list accepts every format.",
    question: MessageTag::FcFormatAccepted,
    failure: MessageTag::FcFormatAcceptedAns,
    indication: Failed,
    sub_indications: &[S::FormatFailure],
    configurable: true,
};

pub static FC_STRUCTURE_VALID: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_FC_STRUCTURE_VALID,
    block: BlockId::Fc,
    title: "Signature structure valid",
    description: "The parsing layer reported the signature container as structurally valid.",
    question: MessageTag::FcStructureValid,
    failure: MessageTag::FcStructureValidAns,
    indication: Failed,
    sub_indications: &[S::FormatFailure],
    configurable: true,
};

pub static ISC_SIGNING_CERTIFICATE_IDENTIFIED: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ISC_SIGNING_CERTIFICATE_IDENTIFIED,
    block: BlockId::Isc,
    title: "Signing certificate identified",
    description: "A signing certificate candidate was found and resolves to a known certificate.",
    question: MessageTag::IscSigningCertificateIdentified,
    failure: MessageTag::IscSigningCertificateIdentifiedAns,
    indication: Indeterminate,
    sub_indications: &[S::NoSigningCertificateFound],
    configurable: true,
};

pub static ISC_SIGNING_CERTIFICATE_REFERENCE_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ISC_SIGNING_CERTIFICATE_REFERENCE_PRESENT,
    block: BlockId::Isc,
    title: "Signing certificate attribute present",
    description: "The signed signing-certificate attribute is present in the signature.",
    question: MessageTag::IscSigningCertificateReferencePresent,
    failure: MessageTag::IscSigningCertificateReferencePresentAns,
    indication: Indeterminate,
    sub_indications: &[S::NoSigningCertificateFound],
    configurable: true,
};

pub static ISC_SIGNING_CERTIFICATE_DIGEST_MATCH: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ISC_SIGNING_CERTIFICATE_DIGEST_MATCH,
    block: BlockId::Isc,
    title: "Signing certificate digest matches",
    description: "The digest in the signing-certificate attribute matches the certificate.",
    question: MessageTag::IscSigningCertificateDigestMatch,
    failure: MessageTag::IscSigningCertificateDigestMatchAns,
    indication: Indeterminate,
    sub_indications: &[S::NoSigningCertificateFound],
    configurable: true,
};

pub static ISC_ISSUER_SERIAL_MATCH: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ISC_ISSUER_SERIAL_MATCH,
    block: BlockId::Isc,
    title: "Issuer and serial number match",
    description: "The issuer name and serial number in the signing-certificate attribute match.",
    question: MessageTag::IscIssuerSerialMatch,
    failure: MessageTag::IscIssuerSerialMatchAns,
    indication: Indeterminate,
    sub_indications: &[S::NoSigningCertificateFound],
    configurable: true,
};

pub static XCV_CHAIN_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_XCV_CHAIN_PRESENT,
    block: BlockId::Xcv,
    title: "Certificate chain present",
    description: "A certificate chain was built for the token's signing certificate.",
    question: MessageTag::XcvChainPresent,
    failure: MessageTag::XcvChainPresentAns,
    indication: Indeterminate,
    sub_indications: &[S::NoCertificateChainFound],
    configurable: true,
};

pub static XCV_TRUST_ANCHOR_REACHED: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_XCV_TRUST_ANCHOR_REACHED,
    block: BlockId::Xcv,
    title: "Trust anchor reached",
    description: "Some certificate of the chain is a trust anchor.",
    question: MessageTag::XcvTrustAnchorReached,
    failure: MessageTag::XcvTrustAnchorReachedAns,
    indication: Indeterminate,
    sub_indications: &[S::NoCertificateChainFound],
    configurable: true,
};

pub static XCV_CERTIFICATE_VALID: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_XCV_CERTIFICATE_VALID,
    block: BlockId::Xcv,
    title: "Chain certificate valid",
    description: "The per-certificate validation of one chain element concluded PASSED. The \
verdict of a failing element is propagated unchanged.",
    question: MessageTag::XcvCertificateValid,
    failure: MessageTag::XcvCertificateValidAns,
    indication: Indeterminate,
    sub_indications: &[
        S::CertificateChainGeneralFailure,
        S::NotYetValid,
        S::OutOfBoundsNoPoe,
        S::OutOfBoundsNotRevoked,
        S::RevokedNoPoe,
        S::RevokedCaNoPoe,
        S::TryLater,
        S::CryptoConstraintsFailureNoPoe,
        S::ChainConstraintsFailure,
    ],
    configurable: false,
};

pub static SUB_XCV_SIGNATURE_INTACT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_SIGNATURE_INTACT,
    block: BlockId::SubXcv,
    title: "Certificate signature intact",
    description: "The certificate's own signature verified against its issuer's key.",
    question: MessageTag::SubXcvSignatureIntact,
    failure: MessageTag::SubXcvSignatureIntactAns,
    indication: Indeterminate,
    sub_indications: &[S::CertificateChainGeneralFailure],
    configurable: true,
};

pub static SUB_XCV_VALIDITY_RANGE: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_VALIDITY_RANGE,
    block: BlockId::SubXcv,
    title: "Certificate in validity range",
    description: "The reference time lies within notBefore..=notAfter. Before the range the \
verdict is FAILED/NOT_YET_VALID. After it the verdict is OUT_OF_BOUNDS_NOT_REVOKED when the \
latest revocation data reports the certificate good, otherwise OUT_OF_BOUNDS_NO_POE.",
    question: MessageTag::SubXcvValidityRange,
    failure: MessageTag::SubXcvValidityRangeAns,
    indication: Indeterminate,
    sub_indications: &[S::OutOfBoundsNoPoe, S::OutOfBoundsNotRevoked, S::NotYetValid],
    configurable: true,
};

pub static SUB_XCV_REVOCATION_DATA_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_REVOCATION_DATA_PRESENT,
    block: BlockId::SubXcv,
    title: "Revocation data present",
    description: "Revocation data exists for the certificate. Trust anchors and certificates \
carrying id-pkix-ocsp-nocheck are exempt.",
    question: MessageTag::SubXcvRevocationDataPresent,
    failure: MessageTag::SubXcvRevocationDataPresentAns,
    indication: Indeterminate,
    sub_indications: &[S::TryLater],
    configurable: true,
};

pub static SUB_XCV_REVOCATION_FRESH: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_REVOCATION_FRESH,
    block: BlockId::SubXcv,
    title: "Revocation data fresh",
    description: "The revocation freshness checker concluded PASSED for the latest revocation \
data of the certificate.",
    question: MessageTag::SubXcvRevocationFresh,
    failure: MessageTag::SubXcvRevocationFreshAns,
    indication: Indeterminate,
    sub_indications: &[S::TryLater],
    configurable: true,
};

pub static SUB_XCV_NOT_REVOKED: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_NOT_REVOKED,
    block: BlockId::SubXcv,
    title: "Certificate not revoked",
    description: "The latest revocation data does not report the certificate revoked at or \
before the reference time. An unknown status is treated as TRY_LATER.",
    question: MessageTag::SubXcvNotRevoked,
    failure: MessageTag::SubXcvNotRevokedAns,
    indication: Indeterminate,
    sub_indications: &[S::RevokedNoPoe, S::RevokedCaNoPoe, S::TryLater],
    configurable: true,
};

pub static SUB_XCV_CRYPTO_CONSTRAINTS: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_CRYPTO_CONSTRAINTS,
    block: BlockId::SubXcv,
    title: "Certificate signature algorithm acceptable",
    description: "The certificate's signature algorithm and key size are accepted and not \
expired at the reference time.",
    question: MessageTag::SubXcvCryptoConstraints,
    failure: MessageTag::SubXcvCryptoConstraintsAns,
    indication: Indeterminate,
    sub_indications: &[S::CryptoConstraintsFailureNoPoe],
    configurable: true,
};

pub static SUB_XCV_KEY_USAGE: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_KEY_USAGE,
    block: BlockId::SubXcv,
    title: "Signing certificate key usage",
    description: "The signing certificate carries one of the policy's expected key usages. \
Applies to the signing certificate of signatures only.",
    question: MessageTag::SubXcvKeyUsage,
    failure: MessageTag::SubXcvKeyUsageAns,
    indication: Indeterminate,
    sub_indications: &[S::ChainConstraintsFailure],
    configurable: true,
};

pub static SUB_XCV_TIMESTAMPING_EKU: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SUB_XCV_TIMESTAMPING_EKU,
    block: BlockId::SubXcv,
    title: "Time-stamping extended key usage",
    description: "The signing certificate of a time-stamp carries the timeStamping extended \
key usage. Applies to time-stamp tokens only.",
    question: MessageTag::SubXcvTimestampingEku,
    failure: MessageTag::SubXcvTimestampingEkuAns,
    indication: Indeterminate,
    sub_indications: &[S::ChainConstraintsFailure],
    configurable: true,
};

pub static RFC_REVOCATION_SIGNATURE_INTACT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_RFC_REVOCATION_SIGNATURE_INTACT,
    block: BlockId::Rfc,
    title: "Revocation data signature intact",
    description: "The CRL or OCSP response signature verified.",
    question: MessageTag::RfcRevocationSignatureIntact,
    failure: MessageTag::RfcRevocationSignatureIntactAns,
    indication: Indeterminate,
    sub_indications: &[S::TryLater],
    configurable: true,
};

pub static RFC_NEXT_UPDATE_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_RFC_NEXT_UPDATE_PRESENT,
    block: BlockId::Rfc,
    title: "Next update present",
    description: "The revocation data declares a nextUpdate time.",
    question: MessageTag::RfcNextUpdatePresent,
    failure: MessageTag::RfcNextUpdatePresentAns,
    indication: Indeterminate,
    sub_indications: &[S::TryLater],
    configurable: true,
};

pub static RFC_REVOCATION_FRESH: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_RFC_REVOCATION_FRESH,
    block: BlockId::Rfc,
    title: "Revocation data fresh at reference time",
    description: "With a maximum revocation age configured, thisUpdate must not be older than \
the reference time minus that age. Without one, the reference time must not be after \
nextUpdate.",
    question: MessageTag::RfcRevocationFresh,
    failure: MessageTag::RfcRevocationFreshAns,
    indication: Indeterminate,
    sub_indications: &[S::TryLater],
    configurable: true,
};

pub static CV_REFERENCE_DATA_FOUND: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_CV_REFERENCE_DATA_FOUND,
    block: BlockId::Cv,
    title: "Signed data found",
    description: "Every data object referenced by the signature was found.",
    question: MessageTag::CvReferenceDataFound,
    failure: MessageTag::CvReferenceDataFoundAns,
    indication: Indeterminate,
    sub_indications: &[S::SignedDataNotFound],
    configurable: true,
};

pub static CV_REFERENCE_DATA_INTACT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_CV_REFERENCE_DATA_INTACT,
    block: BlockId::Cv,
    title: "Signed data intact",
    description: "Every referenced data object matches its signed digest.",
    question: MessageTag::CvReferenceDataIntact,
    failure: MessageTag::CvReferenceDataIntactAns,
    indication: Failed,
    sub_indications: &[S::HashFailure],
    configurable: true,
};

pub static CV_SIGNATURE_INTACT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_CV_SIGNATURE_INTACT,
    block: BlockId::Cv,
    title: "Signature value intact",
    description: "The signature value verified with the signing certificate's public key.",
    question: MessageTag::CvSignatureIntact,
    failure: MessageTag::CvSignatureIntactAns,
    indication: Failed,
    sub_indications: &[S::SigCryptoFailure],
    configurable: true,
};

pub static SAV_SIGNING_TIME_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SAV_SIGNING_TIME_PRESENT,
    block: BlockId::Sav,
    title: "Signing time present",
    description: "The signature carries a claimed signing time.",
    question: MessageTag::SavSigningTimePresent,
    failure: MessageTag::SavSigningTimePresentAns,
    indication: Indeterminate,
    sub_indications: &[S::SigConstraintsFailure],
    configurable: true,
};

pub static SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT,
    block: BlockId::Sav,
    title: "Message digest or signed properties present",
    description: "At least one digest matcher is of type message-digest or signed-properties.",
    question: MessageTag::SavMessageDigestOrSignedPropertiesPresent,
    failure: MessageTag::SavMessageDigestOrSignedPropertiesPresentAns,
    indication: Indeterminate,
    sub_indications: &[S::SigConstraintsFailure],
    configurable: true,
};

pub static SAV_CONTENT_TYPE_PRESENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SAV_CONTENT_TYPE_PRESENT,
    block: BlockId::Sav,
    title: "Content type present",
    description: "The signature carries a signed content-type attribute.",
    question: MessageTag::SavContentTypePresent,
    failure: MessageTag::SavContentTypePresentAns,
    indication: Indeterminate,
    sub_indications: &[S::SigConstraintsFailure],
    configurable: true,
};

pub static SAV_CRYPTO_CONSTRAINTS: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_SAV_CRYPTO_CONSTRAINTS,
    block: BlockId::Sav,
    title: "Signature algorithm acceptable",
    description: "The token's digest and encryption algorithms and key size are accepted and \
not expired at the reference time.",
    question: MessageTag::SavCryptoConstraints,
    failure: MessageTag::SavCryptoConstraintsAns,
    indication: Indeterminate,
    sub_indications: &[S::CryptoConstraintsFailureNoPoe],
    configurable: true,
};

pub static ERV_ARCHIVE_TIMESTAMP_VALID: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ERV_ARCHIVE_TIMESTAMP_VALID,
    block: BlockId::Erv,
    title: "Archive time-stamp valid",
    description: "The time-stamp validation process concluded PASSED for an archive time-stamp.",
    question: MessageTag::ErvArchiveTimestampValid,
    failure: MessageTag::ErvArchiveTimestampValidAns,
    indication: Indeterminate,
    sub_indications: &[S::NoPoe],
    configurable: false,
};

pub static ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER,
    block: BlockId::Erv,
    title: "Archive time-stamps cover each other",
    description: "Ordered by production time, each archive time-stamp after the first covers \
its immediate predecessor (adjacent mode) or every earlier one (transitive mode). A single \
archive time-stamp passes vacuously.",
    question: MessageTag::ErvArchiveTimestampsCoverEachOther,
    failure: MessageTag::ErvArchiveTimestampsCoverEachOtherAns,
    indication: Failed,
    sub_indications: &[S::TimestampCoverageFailure],
    configurable: true,
};

pub static ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE,
    block: BlockId::Erv,
    title: "First archive time-stamp covers the signature",
    description: "The earliest archive time-stamp references the signature among its signed \
objects.",
    question: MessageTag::ErvFirstArchiveTimestampCoversSignature,
    failure: MessageTag::ErvFirstArchiveTimestampCoversSignatureAns,
    indication: Failed,
    sub_indications: &[S::TimestampCoverageFailure],
    configurable: true,
};

pub static TSC_TIMESTAMP_ORDER: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_TSC_TIMESTAMP_ORDER,
    block: BlockId::Tsc,
    title: "Time-stamps in order",
    description: "Content time-stamps precede signature time-stamps, which precede archive \
time-stamps, within the configured clock skew.",
    question: MessageTag::TscTimestampOrder,
    failure: MessageTag::TscTimestampOrderAns,
    indication: Indeterminate,
    sub_indications: &[S::TimestampOrderFailure],
    configurable: true,
};

pub static TSC_SIGNING_TIME_BEFORE_BEST_SIGNATURE_TIME: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_TSC_SIGNING_TIME_BEFORE_BEST_SIGNATURE_TIME,
    block: BlockId::Tsc,
    title: "Signing time before best signature time",
    description: "The claimed signing time does not lie after the best signature time (plus \
clock skew).",
    question: MessageTag::TscSigningTimeBeforeBestSignatureTime,
    failure: MessageTag::TscSigningTimeBeforeBestSignatureTimeAns,
    indication: Indeterminate,
    sub_indications: &[S::SigConstraintsFailure],
    configurable: true,
};

pub static TSC_TIMESTAMP_DELAY: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_TSC_TIMESTAMP_DELAY,
    block: BlockId::Tsc,
    title: "Time-stamp delay",
    description: "The best signature time lies no later than the claimed signing time plus \
the configured time-stamp delay. Passes when no delay is configured.",
    question: MessageTag::TscTimestampDelay,
    failure: MessageTag::TscTimestampDelayAns,
    indication: Indeterminate,
    sub_indications: &[S::SigConstraintsFailure],
    configurable: true,
};

pub static QUAL_TRUSTED_LIST_REACHED: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_TRUSTED_LIST_REACHED,
    block: BlockId::QualCert,
    title: "Trusted list reached",
    description: "The certificate chain ends at a trust service listed in a trusted list.",
    question: MessageTag::QualTrustedListReached,
    failure: MessageTag::QualTrustedListReachedAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

pub static QUAL_SERVICE_GRANTED_AT_TIME: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_SERVICE_GRANTED_AT_TIME,
    block: BlockId::QualCert,
    title: "Trust service granted at time",
    description: "The issuing trust service had status granted at the reference time.",
    question: MessageTag::QualServiceGrantedAtTime,
    failure: MessageTag::QualServiceGrantedAtTimeAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

pub static QUAL_QC_COMPLIANCE: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_QC_COMPLIANCE,
    block: BlockId::QualCert,
    title: "Qualified certificate",
    description: "The certificate declares QC compliance, or the trust service qualifies it.",
    question: MessageTag::QualQcCompliance,
    failure: MessageTag::QualQcComplianceAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

pub static QUAL_FOR_ESIG: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_FOR_ESIG,
    block: BlockId::QualCert,
    title: "Certificate for electronic signatures",
    description: "The certificate type (QC statement or trust service qualifier) is eSig.",
    question: MessageTag::QualForEsig,
    failure: MessageTag::QualForEsigAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: false,
};

pub static QUAL_QSCD: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_QSCD,
    block: BlockId::QualCert,
    title: "Private key on a QSCD",
    description: "The certificate declares (or the trust service asserts) that the private key \
resides in a qualified signature creation device.",
    question: MessageTag::QualQscd,
    failure: MessageTag::QualQscdAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: false,
};

pub static QUAL_IS_ADES: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_IS_ADES,
    block: BlockId::QualSig,
    title: "Signature is AdES",
    description: "The long-term validation process concluded PASSED.",
    question: MessageTag::QualIsAdes,
    failure: MessageTag::QualIsAdesAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

pub static QUAL_QUALIFIED_AT_BEST_SIGNATURE_TIME: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_QUALIFIED_AT_BEST_SIGNATURE_TIME,
    block: BlockId::QualSig,
    title: "Certificate qualified at best signature time",
    description: "The signing certificate is qualified for eSig at the best signature time.",
    question: MessageTag::QualQualifiedAtBestSignatureTime,
    failure: MessageTag::QualQualifiedAtBestSignatureTimeAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

pub static QUAL_QUALIFICATION_CONSISTENT: CheckDescriptor = CheckDescriptor {
    id: ids::CHECK_QUAL_QUALIFICATION_CONSISTENT,
    block: BlockId::QualSig,
    title: "Qualification consistent over time",
    description: "The certificate qualification at issuance equals the qualification at the \
best signature time.",
    question: MessageTag::QualQualificationConsistent,
    failure: MessageTag::QualQualificationConsistentAns,
    indication: Indeterminate,
    sub_indications: &[S::NotQualified],
    configurable: true,
};

/// Every check, grouped by block in process order.
pub static CATALOG: &[&CheckDescriptor] = &[
    &FC_FORMAT_ACCEPTED,
    &FC_STRUCTURE_VALID,
    &ISC_SIGNING_CERTIFICATE_IDENTIFIED,
    &ISC_SIGNING_CERTIFICATE_REFERENCE_PRESENT,
    &ISC_SIGNING_CERTIFICATE_DIGEST_MATCH,
    &ISC_ISSUER_SERIAL_MATCH,
    &XCV_CHAIN_PRESENT,
    &XCV_TRUST_ANCHOR_REACHED,
    &XCV_CERTIFICATE_VALID,
    &SUB_XCV_SIGNATURE_INTACT,
    &SUB_XCV_VALIDITY_RANGE,
    &SUB_XCV_REVOCATION_DATA_PRESENT,
    &SUB_XCV_REVOCATION_FRESH,
    &SUB_XCV_NOT_REVOKED,
    &SUB_XCV_CRYPTO_CONSTRAINTS,
    &SUB_XCV_KEY_USAGE,
    &SUB_XCV_TIMESTAMPING_EKU,
    &RFC_REVOCATION_SIGNATURE_INTACT,
    &RFC_NEXT_UPDATE_PRESENT,
    &RFC_REVOCATION_FRESH,
    &CV_REFERENCE_DATA_FOUND,
    &CV_REFERENCE_DATA_INTACT,
    &CV_SIGNATURE_INTACT,
    &SAV_SIGNING_TIME_PRESENT,
    &SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT,
    &SAV_CONTENT_TYPE_PRESENT,
    &SAV_CRYPTO_CONSTRAINTS,
    &ERV_ARCHIVE_TIMESTAMP_VALID,
    &ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER,
    &ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE,
    &TSC_TIMESTAMP_ORDER,
    &TSC_SIGNING_TIME_BEFORE_BEST_SIGNATURE_TIME,
    &TSC_TIMESTAMP_DELAY,
    &QUAL_TRUSTED_LIST_REACHED,
    &QUAL_SERVICE_GRANTED_AT_TIME,
    &QUAL_QC_COMPLIANCE,
    &QUAL_FOR_ESIG,
    &QUAL_QSCD,
    &QUAL_IS_ADES,
    &QUAL_QUALIFIED_AT_BEST_SIGNATURE_TIME,
    &QUAL_QUALIFICATION_CONSISTENT,
];

pub fn lookup(check_id: &str) -> Option<&'static CheckDescriptor> {
    CATALOG.iter().copied().find(|d| d.id == check_id)
}

/// Descriptor whose question or failure tag is `tag`.
pub fn lookup_by_tag(tag: MessageTag) -> Option<&'static CheckDescriptor> {
    CATALOG
        .iter()
        .copied()
        .find(|d| d.question == tag || d.failure == tag)
}
