//! Time-stamp coherence at the best signature time.

use super::format_time;
use crate::check::{Check, EvidenceFault};
use crate::model::{TimestampEvidence, TimestampKind};
use adesval_types::{CheckDescriptor, Message, catalog};
use time::{Duration, OffsetDateTime};

fn rank(kind: TimestampKind) -> u8 {
    match kind {
        TimestampKind::Content => 0,
        TimestampKind::Signature => 1,
        TimestampKind::Archive => 2,
    }
}

/// Content time-stamps precede signature time-stamps, which precede archive time-stamps.
pub struct TimestampOrder<'a> {
    pub timestamps: Vec<&'a TimestampEvidence>,
    pub clock_skew: Duration,
}

impl<'a> TimestampOrder<'a> {
    /// `(earlier kind, later kind)` ids of the first inversion.
    pub fn first_inversion(&self) -> Option<(&'a str, &'a str)> {
        for &a in &self.timestamps {
            for &b in &self.timestamps {
                // Past the representable range the skew is unbounded.
                let inverted = b
                    .production_time
                    .checked_add(self.clock_skew)
                    .is_some_and(|latest| a.production_time > latest);
                if rank(a.kind) < rank(b.kind) && inverted {
                    return Some((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        None
    }
}

impl Check for TimestampOrder<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::TSC_TIMESTAMP_ORDER
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.first_inversion().is_none())
    }

    fn failure_message(&self) -> Message {
        let mut message = Message::new(self.descriptor().failure);
        if let Some((late, early)) = self.first_inversion() {
            message = message.arg(late).arg(early);
        }
        message
    }
}

pub struct SigningTimeBeforeBestSignatureTime {
    pub claimed_signing_time: Option<OffsetDateTime>,
    pub best_signature_time: OffsetDateTime,
    pub clock_skew: Duration,
}

impl Check for SigningTimeBeforeBestSignatureTime {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::TSC_SIGNING_TIME_BEFORE_BEST_SIGNATURE_TIME
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.claimed_signing_time.is_none_or(|claimed| {
            self.best_signature_time
                .checked_add(self.clock_skew)
                .is_none_or(|latest| claimed <= latest)
        }))
    }

    fn failure_message(&self) -> Message {
        let claimed = self
            .claimed_signing_time
            .map(format_time)
            .unwrap_or_default();
        Message::new(self.descriptor().failure)
            .arg(claimed)
            .arg(format_time(self.best_signature_time))
    }
}

/// Passes when no delay is configured or the signature carries no signing time.
pub struct TimestampDelay {
    pub claimed_signing_time: Option<OffsetDateTime>,
    pub best_signature_time: OffsetDateTime,
    pub delay: Option<Duration>,
}

impl Check for TimestampDelay {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::TSC_TIMESTAMP_DELAY
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(match (self.claimed_signing_time, self.delay) {
            (Some(claimed), Some(delay)) => claimed
                .checked_add(delay)
                .is_none_or(|deadline| self.best_signature_time <= deadline),
            _ => true,
        })
    }

    fn failure_message(&self) -> Message {
        let claimed = self
            .claimed_signing_time
            .map(format_time)
            .unwrap_or_default();
        Message::new(self.descriptor().failure)
            .arg(format_time(self.best_signature_time))
            .arg(claimed)
    }
}
