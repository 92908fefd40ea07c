//! Cryptographic verification.

use crate::check::{Check, EvidenceFault};
use crate::model::DigestMatcher;
use adesval_types::{CheckDescriptor, Message, catalog};

fn matchers<'a>(
    token_id: &str,
    matchers: Option<&'a [DigestMatcher]>,
) -> Result<&'a [DigestMatcher], EvidenceFault> {
    matchers.ok_or_else(|| EvidenceFault::MissingDigestMatchers {
        token: token_id.to_string(),
    })
}

pub struct ReferenceDataFound<'a> {
    pub token_id: &'a str,
    pub matchers: Option<&'a [DigestMatcher]>,
}

impl Check for ReferenceDataFound<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::CV_REFERENCE_DATA_FOUND
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        let list = matchers(self.token_id, self.matchers)?;
        Ok(!list.is_empty() && list.iter().all(|m| m.data_found))
    }

    fn failure_message(&self) -> Message {
        let missing = self
            .matchers
            .unwrap_or_default()
            .iter()
            .find(|m| !m.data_found)
            .map(DigestMatcher::label)
            .unwrap_or_else(|| self.token_id.to_string());
        Message::new(self.descriptor().failure).arg(missing)
    }
}

pub struct ReferenceDataIntact<'a> {
    pub token_id: &'a str,
    pub matchers: Option<&'a [DigestMatcher]>,
}

impl Check for ReferenceDataIntact<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::CV_REFERENCE_DATA_INTACT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        let list = matchers(self.token_id, self.matchers)?;
        Ok(list.iter().filter(|m| m.data_found).all(|m| m.data_intact))
    }

    fn failure_message(&self) -> Message {
        let altered = self
            .matchers
            .unwrap_or_default()
            .iter()
            .find(|m| m.data_found && !m.data_intact)
            .map(DigestMatcher::label)
            .unwrap_or_else(|| self.token_id.to_string());
        Message::new(self.descriptor().failure).arg(altered)
    }
}

pub struct SignatureIntact<'a> {
    pub token_id: &'a str,
    pub intact: bool,
}

impl Check for SignatureIntact<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::CV_SIGNATURE_INTACT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.intact)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.token_id)
    }
}
