//! X.509 certificate validation and per-certificate sub-validation.

use super::format_time;
use crate::check::{Check, EvidenceFault};
use crate::model::{
    CertificateEvidence, EKU_TIME_STAMPING, EvidenceIndex, KeyUsage, RevocationEvidence,
    RevocationStatus,
};
use adesval_types::{
    BlockReport, CheckDescriptor, Indication, Message, MessageTag, SubIndication, catalog,
};
use time::OffsetDateTime;

pub struct ChainPresent<'a> {
    pub token_id: &'a str,
    pub chain: &'a [String],
}

impl Check for ChainPresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::XCV_CHAIN_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(!self.chain.is_empty())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.token_id)
    }
}

pub struct TrustAnchorReached<'a> {
    pub token_id: &'a str,
    pub chain: &'a [String],
    pub index: &'a EvidenceIndex<'a>,
}

impl TrustAnchorReached<'_> {
    fn anchor(&self) -> Result<Option<&CertificateEvidence>, EvidenceFault> {
        for id in self.chain {
            let cert = self.index.certificate(id)?;
            if cert.trusted {
                return Ok(Some(cert));
            }
        }
        Ok(None)
    }
}

impl Check for TrustAnchorReached<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::XCV_TRUST_ANCHOR_REACHED
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.anchor()?.is_some())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.token_id)
    }

    fn success_infos(&self) -> Vec<Message> {
        match self.anchor() {
            Ok(Some(cert)) => vec![Message::new(MessageTag::InfoTrustAnchor).arg(cert.id.as_str())],
            _ => Vec::new(),
        }
    }
}

/// Wraps the sub-validation of one chain element; a failing element's verdict is
/// propagated unchanged.
pub struct CertificateValid<'a> {
    pub certificate_id: &'a str,
    pub report: BlockReport,
}

impl Check for CertificateValid<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::XCV_CERTIFICATE_VALID
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.report.is_passed())
    }

    fn check_message(&self) -> Message {
        Message::new(self.descriptor().question).arg(self.certificate_id)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.certificate_id)
    }

    fn failure_indication(&self) -> Indication {
        self.report
            .conclusion()
            .map(|c| c.indication)
            .filter(|ind| *ind != Indication::Passed)
            .unwrap_or(self.descriptor().indication)
    }

    fn failure_sub_indication(&self) -> SubIndication {
        self.report
            .conclusion()
            .and_then(|c| c.sub_indication)
            .unwrap_or(self.descriptor().sub_indication())
    }

    fn child_report(&self) -> Option<&BlockReport> {
        Some(&self.report)
    }
}

/// Trust anchors and `ocsp-nocheck` certificates need no revocation data.
fn revocation_exempt(cert: &CertificateEvidence) -> bool {
    cert.trusted || cert.ocsp_no_check
}

pub struct CertificateSignatureIntact<'a> {
    pub cert: &'a CertificateEvidence,
}

impl Check for CertificateSignatureIntact<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_SIGNATURE_INTACT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.cert.signature_intact)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.cert.id.as_str())
    }
}

pub struct ValidityRange<'a> {
    pub cert: &'a CertificateEvidence,
    pub latest_revocation: Option<&'a RevocationEvidence>,
    pub at: OffsetDateTime,
}

impl ValidityRange<'_> {
    fn not_yet_valid(&self) -> bool {
        self.at < self.cert.not_before
    }
}

impl Check for ValidityRange<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_VALIDITY_RANGE
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.cert.not_before <= self.at && self.at <= self.cert.not_after)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure)
            .arg(self.cert.id.as_str())
            .arg(format_time(self.at))
            .arg(format_time(self.cert.not_before))
            .arg(format_time(self.cert.not_after))
    }

    fn failure_indication(&self) -> Indication {
        if self.not_yet_valid() {
            Indication::Failed
        } else {
            Indication::Indeterminate
        }
    }

    fn failure_sub_indication(&self) -> SubIndication {
        if self.not_yet_valid() {
            return SubIndication::NotYetValid;
        }
        let good = self
            .latest_revocation
            .is_some_and(|r| r.status == RevocationStatus::Good);
        if good {
            SubIndication::OutOfBoundsNotRevoked
        } else {
            SubIndication::OutOfBoundsNoPoe
        }
    }
}

pub struct RevocationDataPresent<'a> {
    pub cert: &'a CertificateEvidence,
    pub revocations: &'a [&'a RevocationEvidence],
}

impl Check for RevocationDataPresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_REVOCATION_DATA_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(revocation_exempt(self.cert) || !self.revocations.is_empty())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.cert.id.as_str())
    }
}

/// Wraps the revocation freshness checker run on the latest revocation data.
pub struct RevocationFresh<'a> {
    pub cert: &'a CertificateEvidence,
    pub rfc: Option<BlockReport>,
}

impl Check for RevocationFresh<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_REVOCATION_FRESH
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        if revocation_exempt(self.cert) {
            return Ok(true);
        }
        Ok(self.rfc.as_ref().is_some_and(BlockReport::is_passed))
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.cert.id.as_str())
    }

    fn child_report(&self) -> Option<&BlockReport> {
        if revocation_exempt(self.cert) {
            return None;
        }
        self.rfc.as_ref()
    }
}

pub struct NotRevoked<'a> {
    pub cert: &'a CertificateEvidence,
    /// The token's signing certificate, as opposed to a CA certificate.
    pub is_signing_certificate: bool,
    pub latest_revocation: Option<&'a RevocationEvidence>,
    pub at: OffsetDateTime,
}

impl NotRevoked<'_> {
    fn status_label(&self) -> String {
        match self.latest_revocation {
            None => "unavailable".to_string(),
            Some(rev) => match (rev.status, rev.revocation_time) {
                (RevocationStatus::Revoked, Some(t)) => format!("revoked since {}", format_time(t)),
                (RevocationStatus::Revoked, None) => "revoked".to_string(),
                (RevocationStatus::Unknown, _) => "unknown".to_string(),
                (RevocationStatus::Good, _) => "good".to_string(),
            },
        }
    }
}

impl Check for NotRevoked<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_NOT_REVOKED
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        if revocation_exempt(self.cert) {
            return Ok(true);
        }
        let Some(rev) = self.latest_revocation else {
            return Ok(true);
        };
        match rev.status {
            RevocationStatus::Good => Ok(true),
            RevocationStatus::Unknown => Ok(false),
            RevocationStatus::Revoked => {
                let revoked_at = rev.revoked_at()?;
                Ok(revoked_at.is_none_or(|t| t > self.at))
            }
        }
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure)
            .arg(self.cert.id.as_str())
            .arg(self.status_label())
    }

    fn failure_sub_indication(&self) -> SubIndication {
        match self.latest_revocation.map(|r| r.status) {
            Some(RevocationStatus::Revoked) if self.is_signing_certificate => {
                SubIndication::RevokedNoPoe
            }
            Some(RevocationStatus::Revoked) => SubIndication::RevokedCaNoPoe,
            _ => SubIndication::TryLater,
        }
    }

    fn success_infos(&self) -> Vec<Message> {
        match self.latest_revocation {
            Some(rev) if !revocation_exempt(self.cert) => {
                vec![Message::new(MessageTag::InfoRevocationUsed).arg(rev.id.as_str())]
            }
            _ => Vec::new(),
        }
    }
}

pub struct SigningKeyUsage<'a> {
    pub cert: &'a CertificateEvidence,
    pub expected: &'a [KeyUsage],
}

impl Check for SigningKeyUsage<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_KEY_USAGE
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.expected.is_empty()
            || self.expected.iter().any(|k| self.cert.key_usage.contains(k)))
    }

    fn failure_message(&self) -> Message {
        let expected: Vec<&str> = self.expected.iter().map(|k| k.as_str()).collect();
        Message::new(self.descriptor().failure)
            .arg(self.cert.id.as_str())
            .arg(expected.join(", "))
    }
}

pub struct TimestampingEku<'a> {
    pub cert: &'a CertificateEvidence,
}

impl Check for TimestampingEku<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SUB_XCV_TIMESTAMPING_EKU
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self
            .cert
            .extended_key_usage
            .iter()
            .any(|eku| eku == EKU_TIME_STAMPING))
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.cert.id.as_str())
    }
}
