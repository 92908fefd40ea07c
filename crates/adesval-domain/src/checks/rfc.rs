//! Revocation freshness checker.

use super::format_time;
use crate::check::{Check, EvidenceFault};
use crate::model::RevocationEvidence;
use adesval_types::{CheckDescriptor, Message, catalog};
use time::{Duration, OffsetDateTime};

pub struct RevocationSignatureIntact<'a> {
    pub revocation: &'a RevocationEvidence,
}

impl Check for RevocationSignatureIntact<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::RFC_REVOCATION_SIGNATURE_INTACT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.revocation.signature_intact)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.revocation.id.as_str())
    }
}

pub struct NextUpdatePresent<'a> {
    pub revocation: &'a RevocationEvidence,
}

impl Check for NextUpdatePresent<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::RFC_NEXT_UPDATE_PRESENT
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.revocation.next_update.is_some())
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.revocation.id.as_str())
    }
}

/// With a maximum age, `thisUpdate` must be at or after `at - max_age`. Without one, `at`
/// must not be after `nextUpdate`.
pub struct RevocationFresh<'a> {
    pub revocation: &'a RevocationEvidence,
    pub max_age: Option<Duration>,
    pub at: OffsetDateTime,
}

impl Check for RevocationFresh<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::RFC_REVOCATION_FRESH
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(match self.max_age {
            Some(max_age) => self
                .at
                .checked_sub(max_age)
                .is_none_or(|oldest| self.revocation.this_update >= oldest),
            None => self.revocation.next_update.is_some_and(|next| self.at <= next),
        })
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure)
            .arg(self.revocation.id.as_str())
            .arg(format_time(self.revocation.this_update))
            .arg(format_time(self.at))
    }
}
