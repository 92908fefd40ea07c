//! Certificate and signature qualification.
//!
//! Trusted-list qualifiers of a service granted at the reference time take precedence over
//! what the certificate itself declares.

use super::format_time;
use crate::check::{Check, EvidenceFault};
use crate::model::{CertificateEvidence, QcType, ServiceQualifier, TrustedServiceEvidence};
use adesval_types::{
    CertificateQualification, CheckDescriptor, Conclusion, Message, MessageTag, catalog,
};
use time::OffsetDateTime;

/// Every trusted service listed anywhere in the chain.
pub fn listed_services<'a>(
    chain: &[&'a CertificateEvidence],
) -> impl Iterator<Item = &'a TrustedServiceEvidence> {
    chain.iter().flat_map(|c| c.trusted_services.iter())
}

/// Services of the chain with status granted at `at`.
pub fn granted_services<'a>(
    chain: &[&'a CertificateEvidence],
    at: OffsetDateTime,
) -> Vec<&'a TrustedServiceEvidence> {
    listed_services(chain).filter(|s| s.granted_at(at)).collect()
}

fn any_qualifier(services: &[&TrustedServiceEvidence], q: ServiceQualifier) -> bool {
    services.iter().any(|s| s.has(q))
}

pub fn is_qc(cert: &CertificateEvidence, services: &[&TrustedServiceEvidence]) -> bool {
    if any_qualifier(services, ServiceQualifier::NotQualified) {
        return false;
    }
    cert.qc_statements.compliance || any_qualifier(services, ServiceQualifier::QcStatement)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QcPurpose {
    Esig,
    Eseal,
    Web,
}

pub fn purpose(cert: &CertificateEvidence, services: &[&TrustedServiceEvidence]) -> QcPurpose {
    if any_qualifier(services, ServiceQualifier::QcForEsig) {
        return QcPurpose::Esig;
    }
    if any_qualifier(services, ServiceQualifier::QcForEseal) {
        return QcPurpose::Eseal;
    }
    if any_qualifier(services, ServiceQualifier::QcForWeb) {
        return QcPurpose::Web;
    }
    let types = &cert.qc_statements.types;
    if types.is_empty() || types.contains(&QcType::Esign) {
        QcPurpose::Esig
    } else if types.contains(&QcType::Eseal) {
        QcPurpose::Eseal
    } else {
        QcPurpose::Web
    }
}

pub fn is_qscd(cert: &CertificateEvidence, services: &[&TrustedServiceEvidence]) -> bool {
    if any_qualifier(services, ServiceQualifier::NoQscd) {
        return false;
    }
    cert.qc_statements.qscd || any_qualifier(services, ServiceQualifier::Qscd)
}

/// Qualification of `cert` given the services granted at the instant of interest.
pub fn qualification(
    cert: &CertificateEvidence,
    services: &[&TrustedServiceEvidence],
) -> CertificateQualification {
    if services.is_empty() || !is_qc(cert, services) {
        return CertificateQualification::NotQualified;
    }
    let qscd = is_qscd(cert, services);
    match purpose(cert, services) {
        QcPurpose::Esig if qscd => CertificateQualification::QcForEsigQscd,
        QcPurpose::Esig => CertificateQualification::QcForEsig,
        QcPurpose::Eseal if qscd => CertificateQualification::QcForEsealQscd,
        QcPurpose::Eseal => CertificateQualification::QcForEseal,
        QcPurpose::Web => CertificateQualification::QcForWebAuth,
    }
}

pub struct TrustedListReached<'a> {
    pub chain: &'a [&'a CertificateEvidence],
}

impl Check for TrustedListReached<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_TRUSTED_LIST_REACHED
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(listed_services(self.chain).next().is_some())
    }
}

pub struct ServiceGrantedAtTime<'a> {
    pub granted: &'a [&'a TrustedServiceEvidence],
    pub at: OffsetDateTime,
}

impl Check for ServiceGrantedAtTime<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_SERVICE_GRANTED_AT_TIME
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(!self.granted.is_empty())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(format_time(self.at))
    }
}

pub struct QcCompliance<'a> {
    pub cert: &'a CertificateEvidence,
    pub granted: &'a [&'a TrustedServiceEvidence],
}

impl Check for QcCompliance<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_QC_COMPLIANCE
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(is_qc(self.cert, self.granted))
    }
}

pub struct ForEsig<'a> {
    pub cert: &'a CertificateEvidence,
    pub granted: &'a [&'a TrustedServiceEvidence],
}

impl Check for ForEsig<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_FOR_ESIG
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(purpose(self.cert, self.granted) == QcPurpose::Esig)
    }
}

pub struct Qscd<'a> {
    pub cert: &'a CertificateEvidence,
    pub granted: &'a [&'a TrustedServiceEvidence],
}

impl Check for Qscd<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_QSCD
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(is_qscd(self.cert, self.granted))
    }
}

pub struct IsAdes<'a> {
    pub long_term: &'a Conclusion,
}

impl Check for IsAdes<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_IS_ADES
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.long_term.is_passed())
    }
}

pub struct QualifiedAtBestSignatureTime {
    pub qualification: CertificateQualification,
    pub best_signature_time: OffsetDateTime,
}

impl Check for QualifiedAtBestSignatureTime {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_QUALIFIED_AT_BEST_SIGNATURE_TIME
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.qualification.is_qualified() && self.qualification.is_for_esig())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(format_time(self.best_signature_time))
    }

    fn success_infos(&self) -> Vec<Message> {
        vec![Message::new(MessageTag::InfoCertificateQualification).arg(self.qualification.label())]
    }
}

pub struct QualificationConsistent {
    pub at_issuance: CertificateQualification,
    pub at_best_signature_time: CertificateQualification,
}

impl Check for QualificationConsistent {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::QUAL_QUALIFICATION_CONSISTENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.at_issuance == self.at_best_signature_time)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure)
            .arg(self.at_issuance.label())
            .arg(self.at_best_signature_time.label())
    }
}
