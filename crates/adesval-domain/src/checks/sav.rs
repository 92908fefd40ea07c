//! Signature acceptance validation.

use crate::check::{Check, EvidenceFault};
use crate::model::{DigestMatcher, DigestMatcherKind};
use adesval_types::{CheckDescriptor, catalog};
use time::OffsetDateTime;

pub struct SigningTimePresent {
    pub claimed_signing_time: Option<OffsetDateTime>,
}

impl Check for SigningTimePresent {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SAV_SIGNING_TIME_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.claimed_signing_time.is_some())
    }
}

/// Passes when any digest matcher is of type message-digest or signed-properties. An empty
/// list fails; an absent list is a contract violation.
pub struct MessageDigestOrSignedPropertiesPresent<'a> {
    pub token_id: &'a str,
    pub matchers: Option<&'a [DigestMatcher]>,
}

impl Check for MessageDigestOrSignedPropertiesPresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SAV_MESSAGE_DIGEST_OR_SIGNED_PROPERTIES_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        let list = self
            .matchers
            .ok_or_else(|| EvidenceFault::MissingDigestMatchers {
                token: self.token_id.to_string(),
            })?;
        Ok(list.iter().any(|m| {
            matches!(
                m.kind,
                DigestMatcherKind::MessageDigest | DigestMatcherKind::SignedProperties
            )
        }))
    }
}

pub struct ContentTypePresent<'a> {
    pub content_type: Option<&'a str>,
}

impl Check for ContentTypePresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::SAV_CONTENT_TYPE_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.content_type.is_some_and(|c| !c.trim().is_empty()))
    }
}
