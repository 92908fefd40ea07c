use crate::check::{Check, EvidenceFault};
use crate::model::{EvidenceIndex, SigningCertificateRef, Token};
use adesval_types::{CheckDescriptor, Message, MessageTag, catalog};

pub struct SigningCertificateIdentified<'a> {
    pub token: &'a dyn Token,
    pub index: &'a EvidenceIndex<'a>,
}

impl Check for SigningCertificateIdentified<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ISC_SIGNING_CERTIFICATE_IDENTIFIED
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.index.signing_certificate(self.token)?.is_some())
    }

    fn success_infos(&self) -> Vec<Message> {
        candidate_id(self.token.signing_certificate())
            .map(|id| vec![Message::new(MessageTag::InfoSigningCertificateId).arg(id)])
            .unwrap_or_default()
    }
}

fn candidate_id(reference: Option<&SigningCertificateRef>) -> Option<&str> {
    reference.and_then(|r| r.certificate_id.as_deref())
}

pub struct SigningCertificateReferencePresent<'a> {
    pub reference: Option<&'a SigningCertificateRef>,
}

impl Check for SigningCertificateReferencePresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ISC_SIGNING_CERTIFICATE_REFERENCE_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.reference.is_some_and(|r| r.attribute_present))
    }
}

pub struct SigningCertificateDigestMatch<'a> {
    pub reference: Option<&'a SigningCertificateRef>,
}

impl Check for SigningCertificateDigestMatch<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ISC_SIGNING_CERTIFICATE_DIGEST_MATCH
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.reference.is_some_and(|r| r.digest_match))
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(candidate_id(self.reference).unwrap_or("-"))
    }
}

pub struct IssuerSerialMatch<'a> {
    pub reference: Option<&'a SigningCertificateRef>,
}

impl Check for IssuerSerialMatch<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ISC_ISSUER_SERIAL_MATCH
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.reference.is_some_and(|r| r.issuer_serial_match))
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(candidate_id(self.reference).unwrap_or("-"))
    }
}
