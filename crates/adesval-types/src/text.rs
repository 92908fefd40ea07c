//! Default English rendering of message tags.
//!
//! Positional arguments are written `{0}`, `{1}`, .. and substituted by [`render`].

use crate::message::{Message, MessageTag};

pub fn default_text(tag: MessageTag) -> &'static str {
    use MessageTag as T;
    match tag {
        T::FcFormatAccepted => "Is the signature format accepted?",
        T::FcFormatAcceptedAns => "The signature format '{0}' is not accepted.",
        T::FcStructureValid => "Is the signature structure valid?",
        T::FcStructureValidAns => "The signature structure is not valid.",

        T::IscSigningCertificateIdentified => "Is the signing certificate identified?",
        T::IscSigningCertificateIdentifiedAns => "The signing certificate cannot be identified.",
        T::IscSigningCertificateReferencePresent => {
            "Is the signing certificate attribute present?"
        }
        T::IscSigningCertificateReferencePresentAns => {
            "The signing certificate attribute is missing."
        }
        T::IscSigningCertificateDigestMatch => "Does the signing certificate digest match?",
        T::IscSigningCertificateDigestMatchAns => {
            "The signing certificate digest does not match certificate {0}."
        }
        T::IscIssuerSerialMatch => "Do the issuer name and serial number match?",
        T::IscIssuerSerialMatchAns => {
            "The issuer name and serial number do not match certificate {0}."
        }

        T::XcvChainPresent => "Is a certificate chain present?",
        T::XcvChainPresentAns => "No certificate chain was found for {0}.",
        T::XcvTrustAnchorReached => "Does the certificate chain reach a trust anchor?",
        T::XcvTrustAnchorReachedAns => "The certificate chain of {0} does not reach a trust anchor.",
        T::XcvCertificateValid => "Is the certificate {0} valid?",
        T::XcvCertificateValidAns => "The certificate {0} is not valid.",

        T::SubXcvSignatureIntact => "Is the certificate signature intact?",
        T::SubXcvSignatureIntactAns => "The signature of certificate {0} is not intact.",
        T::SubXcvValidityRange => "Is the certificate within its validity range?",
        T::SubXcvValidityRangeAns => {
            "The certificate {0} is not valid at {1} (valid from {2} to {3})."
        }
        T::SubXcvRevocationDataPresent => "Is revocation data present?",
        T::SubXcvRevocationDataPresentAns => "No revocation data is available for certificate {0}.",
        T::SubXcvRevocationFresh => "Is the revocation data fresh?",
        T::SubXcvRevocationFreshAns => "The revocation data for certificate {0} is not fresh.",
        T::SubXcvNotRevoked => "Is the certificate not revoked?",
        T::SubXcvNotRevokedAns => "The revocation status of certificate {0} is {1}.",
        T::SubXcvCryptoConstraints => "Are the certificate's cryptographic constraints met?",
        T::SubXcvCryptoConstraintsAns => "The algorithm {0} used by {1} is not acceptable at {2}.",
        T::SubXcvKeyUsage => "Does the signing certificate have an expected key usage?",
        T::SubXcvKeyUsageAns => {
            "The signing certificate {0} carries none of the expected key usages ({1})."
        }
        T::SubXcvTimestampingEku => "Does the certificate allow time-stamping?",
        T::SubXcvTimestampingEkuAns => {
            "The certificate {0} lacks the timeStamping extended key usage."
        }

        T::RfcRevocationSignatureIntact => "Is the revocation data signature intact?",
        T::RfcRevocationSignatureIntactAns => "The signature of revocation data {0} is not intact.",
        T::RfcNextUpdatePresent => "Does the revocation data declare a next update?",
        T::RfcNextUpdatePresentAns => "The revocation data {0} has no next update.",
        T::RfcRevocationFresh => "Is the revocation data fresh at the reference time?",
        T::RfcRevocationFreshAns => "The revocation data {0} issued at {1} is not fresh at {2}.",

        T::CvReferenceDataFound => "Has the signed data been found?",
        T::CvReferenceDataFoundAns => "The signed data object {0} was not found.",
        T::CvReferenceDataIntact => "Is the signed data intact?",
        T::CvReferenceDataIntactAns => "The signed data object {0} has been altered.",
        T::CvSignatureIntact => "Is the signature value intact?",
        T::CvSignatureIntactAns => "The signature value of {0} is not intact.",

        T::SavSigningTimePresent => "Is the signing time present?",
        T::SavSigningTimePresentAns => "The signing time is missing.",
        T::SavMessageDigestOrSignedPropertiesPresent => {
            "Is a message-digest or signed-properties reference present?"
        }
        T::SavMessageDigestOrSignedPropertiesPresentAns => {
            "No message-digest or signed-properties reference was found."
        }
        T::SavContentTypePresent => "Is the content type present?",
        T::SavContentTypePresentAns => "The content type attribute is missing.",
        T::SavCryptoConstraints => "Are the signature's cryptographic constraints met?",
        T::SavCryptoConstraintsAns => "The algorithm {0} used by {1} is not acceptable at {2}.",

        T::ErvArchiveTimestampValid => "Is the archive time-stamp {0} valid?",
        T::ErvArchiveTimestampValidAns => "The archive time-stamp {0} is not valid.",
        T::ErvArchiveTimestampsCoverEachOther => "Do the archive time-stamps cover each other?",
        T::ErvArchiveTimestampsCoverEachOtherAns => {
            "The archive time-stamp {0} does not cover the archive time-stamp {1}."
        }
        T::ErvFirstArchiveTimestampCoversSignature => {
            "Does the first archive time-stamp cover the signature?"
        }
        T::ErvFirstArchiveTimestampCoversSignatureAns => {
            "The archive time-stamp {0} does not cover the signature {1}."
        }

        T::TscTimestampOrder => "Are the time-stamps in the expected order?",
        T::TscTimestampOrderAns => "The time-stamp {0} was produced after the time-stamp {1}.",
        T::TscSigningTimeBeforeBestSignatureTime => {
            "Is the signing time before the best signature time?"
        }
        T::TscSigningTimeBeforeBestSignatureTimeAns => {
            "The claimed signing time {0} is after the best signature time {1}."
        }
        T::TscTimestampDelay => "Is the time-stamp delay respected?",
        T::TscTimestampDelayAns => {
            "The best signature time {0} is later than the signing time {1} plus the allowed delay."
        }

        T::QualTrustedListReached => "Does the certificate chain reach a trusted list?",
        T::QualTrustedListReachedAns => "The certificate chain does not reach a trusted list.",
        T::QualServiceGrantedAtTime => "Was the trust service granted at the reference time?",
        T::QualServiceGrantedAtTimeAns => "No trust service was granted at {0}.",
        T::QualQcCompliance => "Is the certificate qualified?",
        T::QualQcComplianceAns => "The certificate is not qualified.",
        T::QualForEsig => "Is the certificate for electronic signatures?",
        T::QualForEsigAns => "The certificate is not for electronic signatures.",
        T::QualQscd => "Is the private key on a QSCD?",
        T::QualQscdAns => "The private key is not on a QSCD.",
        T::QualIsAdes => "Is the signature an AdES?",
        T::QualIsAdesAns => "The signature is not an AdES.",
        T::QualQualifiedAtBestSignatureTime => {
            "Is the certificate qualified at the best signature time?"
        }
        T::QualQualifiedAtBestSignatureTimeAns => {
            "The certificate is not qualified for electronic signatures at {0}."
        }
        T::QualQualificationConsistent => "Is the certificate qualification consistent?",
        T::QualQualificationConsistentAns => {
            "The qualification at issuance ({0}) differs from the qualification at best signature time ({1})."
        }

        T::InfoSigningCertificateId => "Signing certificate: {0}.",
        T::InfoReferenceTime => "Validated at reference time {0}.",
        T::InfoAlgorithmExpires => "The algorithm {0} expires on {1}.",
        T::InfoRevocationUsed => "Revocation data {0} was used.",
        T::InfoBestSignatureTime => "Best signature time: {0}.",
        T::InfoCertificateQualification => "Certificate qualification: {0}.",
        T::InfoTrustAnchor => "Trust anchor: {0}.",

        T::EvidenceStructureViolation => "The evidence is inconsistent: {0}.",
        T::PrerequisiteNotEvaluated => "Block {0} requires block {1}, which was never evaluated.",
    }
}

/// Substitute positional arguments into `template`. Placeholders without a matching
/// argument are left as written.
pub fn render_template(template: &str, args: &[String]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}

/// Render with the default English table.
pub fn render(message: &Message) -> String {
    render_template(default_text(message.tag), &message.args)
}

/// Verify that a localization table covers every tag.
///
/// Returns the tags that are missing or empty, in table order.
pub fn validate_catalog<'a, F>(lookup: F) -> Result<(), Vec<MessageTag>>
where
    F: Fn(MessageTag) -> Option<&'a str>,
{
    let missing: Vec<MessageTag> = MessageTag::ALL
        .iter()
        .copied()
        .filter(|tag| lookup(*tag).is_none_or(|s| s.trim().is_empty()))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
