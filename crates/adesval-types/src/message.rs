//! Flat, versioned table of symbolic message tags.
//!
//! Every check owns two tags: the question (`<check id>`) and the failure answer
//! (`<check id>.ans`). Informational tags live under `info.*`. The engine never carries
//! literal text; rendering happens against [`crate::text`] or an external localization table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bumped whenever a tag is added, removed or renamed.
pub const MESSAGE_TABLE_VERSION: u32 = 1;

macro_rules! message_tags {
    ($( $variant:ident => $id:literal, )+) => {
        /// Symbolic message identifier. Serialized as its dotted string id.
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        pub enum MessageTag {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl MessageTag {
            /// Every tag, in table order.
            pub const ALL: &'static [MessageTag] = &[$(MessageTag::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(MessageTag::$variant => $id,)+
                }
            }
        }
    };
}

message_tags! {
    FcFormatAccepted => "fc.format_accepted",
    FcFormatAcceptedAns => "fc.format_accepted.ans",
    FcStructureValid => "fc.structure_valid",
    FcStructureValidAns => "fc.structure_valid.ans",

    IscSigningCertificateIdentified => "isc.signing_certificate_identified",
    IscSigningCertificateIdentifiedAns => "isc.signing_certificate_identified.ans",
    IscSigningCertificateReferencePresent => "isc.signing_certificate_reference_present",
    IscSigningCertificateReferencePresentAns => "isc.signing_certificate_reference_present.ans",
    IscSigningCertificateDigestMatch => "isc.signing_certificate_digest_match",
    IscSigningCertificateDigestMatchAns => "isc.signing_certificate_digest_match.ans",
    IscIssuerSerialMatch => "isc.issuer_serial_match",
    IscIssuerSerialMatchAns => "isc.issuer_serial_match.ans",

    XcvChainPresent => "xcv.chain_present",
    XcvChainPresentAns => "xcv.chain_present.ans",
    XcvTrustAnchorReached => "xcv.trust_anchor_reached",
    XcvTrustAnchorReachedAns => "xcv.trust_anchor_reached.ans",
    XcvCertificateValid => "xcv.certificate_valid",
    XcvCertificateValidAns => "xcv.certificate_valid.ans",

    SubXcvSignatureIntact => "sub_xcv.signature_intact",
    SubXcvSignatureIntactAns => "sub_xcv.signature_intact.ans",
    SubXcvValidityRange => "sub_xcv.validity_range",
    SubXcvValidityRangeAns => "sub_xcv.validity_range.ans",
    SubXcvRevocationDataPresent => "sub_xcv.revocation_data_present",
    SubXcvRevocationDataPresentAns => "sub_xcv.revocation_data_present.ans",
    SubXcvRevocationFresh => "sub_xcv.revocation_fresh",
    SubXcvRevocationFreshAns => "sub_xcv.revocation_fresh.ans",
    SubXcvNotRevoked => "sub_xcv.not_revoked",
    SubXcvNotRevokedAns => "sub_xcv.not_revoked.ans",
    SubXcvCryptoConstraints => "sub_xcv.crypto_constraints",
    SubXcvCryptoConstraintsAns => "sub_xcv.crypto_constraints.ans",
    SubXcvKeyUsage => "sub_xcv.key_usage",
    SubXcvKeyUsageAns => "sub_xcv.key_usage.ans",
    SubXcvTimestampingEku => "sub_xcv.timestamping_eku",
    SubXcvTimestampingEkuAns => "sub_xcv.timestamping_eku.ans",

    RfcRevocationSignatureIntact => "rfc.revocation_signature_intact",
    RfcRevocationSignatureIntactAns => "rfc.revocation_signature_intact.ans",
    RfcNextUpdatePresent => "rfc.next_update_present",
    RfcNextUpdatePresentAns => "rfc.next_update_present.ans",
    RfcRevocationFresh => "rfc.revocation_fresh",
    RfcRevocationFreshAns => "rfc.revocation_fresh.ans",

    CvReferenceDataFound => "cv.reference_data_found",
    CvReferenceDataFoundAns => "cv.reference_data_found.ans",
    CvReferenceDataIntact => "cv.reference_data_intact",
    CvReferenceDataIntactAns => "cv.reference_data_intact.ans",
    CvSignatureIntact => "cv.signature_intact",
    CvSignatureIntactAns => "cv.signature_intact.ans",

    SavSigningTimePresent => "sav.signing_time_present",
    SavSigningTimePresentAns => "sav.signing_time_present.ans",
    SavMessageDigestOrSignedPropertiesPresent => "sav.message_digest_or_signed_properties_present",
    SavMessageDigestOrSignedPropertiesPresentAns =>
        "sav.message_digest_or_signed_properties_present.ans",
    SavContentTypePresent => "sav.content_type_present",
    SavContentTypePresentAns => "sav.content_type_present.ans",
    SavCryptoConstraints => "sav.crypto_constraints",
    SavCryptoConstraintsAns => "sav.crypto_constraints.ans",

    ErvArchiveTimestampValid => "erv.archive_timestamp_valid",
    ErvArchiveTimestampValidAns => "erv.archive_timestamp_valid.ans",
    ErvArchiveTimestampsCoverEachOther => "erv.archive_timestamps_cover_each_other",
    ErvArchiveTimestampsCoverEachOtherAns => "erv.archive_timestamps_cover_each_other.ans",
    ErvFirstArchiveTimestampCoversSignature => "erv.first_archive_timestamp_covers_signature",
    ErvFirstArchiveTimestampCoversSignatureAns =>
        "erv.first_archive_timestamp_covers_signature.ans",

    TscTimestampOrder => "tsc.timestamp_order",
    TscTimestampOrderAns => "tsc.timestamp_order.ans",
    TscSigningTimeBeforeBestSignatureTime => "tsc.signing_time_before_best_signature_time",
    TscSigningTimeBeforeBestSignatureTimeAns =>
        "tsc.signing_time_before_best_signature_time.ans",
    TscTimestampDelay => "tsc.timestamp_delay",
    TscTimestampDelayAns => "tsc.timestamp_delay.ans",

    QualTrustedListReached => "qual.trusted_list_reached",
    QualTrustedListReachedAns => "qual.trusted_list_reached.ans",
    QualServiceGrantedAtTime => "qual.service_granted_at_time",
    QualServiceGrantedAtTimeAns => "qual.service_granted_at_time.ans",
    QualQcCompliance => "qual.qc_compliance",
    QualQcComplianceAns => "qual.qc_compliance.ans",
    QualForEsig => "qual.for_esig",
    QualForEsigAns => "qual.for_esig.ans",
    QualQscd => "qual.qscd",
    QualQscdAns => "qual.qscd.ans",
    QualIsAdes => "qual.is_ades",
    QualIsAdesAns => "qual.is_ades.ans",
    QualQualifiedAtBestSignatureTime => "qual.qualified_at_best_signature_time",
    QualQualifiedAtBestSignatureTimeAns => "qual.qualified_at_best_signature_time.ans",
    QualQualificationConsistent => "qual.qualification_consistent",
    QualQualificationConsistentAns => "qual.qualification_consistent.ans",

    InfoSigningCertificateId => "info.signing_certificate_id",
    InfoReferenceTime => "info.reference_time",
    InfoAlgorithmExpires => "info.algorithm_expires",
    InfoRevocationUsed => "info.revocation_used",
    InfoBestSignatureTime => "info.best_signature_time",
    InfoCertificateQualification => "info.certificate_qualification",
    InfoTrustAnchor => "info.trust_anchor",

    EvidenceStructureViolation => "engine.evidence_structure_violation",
    PrerequisiteNotEvaluated => "engine.prerequisite_not_evaluated",
}

impl MessageTag {
    /// Failure answers carry the `.ans` suffix.
    pub fn is_answer(self) -> bool {
        self.as_str().ends_with(".ans")
    }

    pub fn is_info(self) -> bool {
        self.as_str().starts_with("info.")
    }
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMessageTag(pub String);

impl fmt::Display for UnknownMessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownMessageTag {}

impl FromStr for MessageTag {
    type Err = UnknownMessageTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownMessageTag(s.to_string()))
    }
}

/// A tag plus its ordered, already-formatted arguments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub tag: MessageTag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Message {
    pub fn new(tag: MessageTag) -> Self {
        Self {
            tag,
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(tag: MessageTag, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }
}

impl From<MessageTag> for Message {
    fn from(tag: MessageTag) -> Self {
        Message::new(tag)
    }
}
