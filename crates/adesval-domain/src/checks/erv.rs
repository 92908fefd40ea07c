//! Archive time-stamp chain.

use crate::check::{Check, EvidenceFault};
use crate::model::TimestampEvidence;
use crate::policy::CoverageMode;
use adesval_types::{BlockReport, CheckDescriptor, Message, catalog};

pub struct ArchiveTimestampValid<'a> {
    pub timestamp_id: &'a str,
    /// The time-stamp validation process report for this archive time-stamp.
    pub report: &'a BlockReport,
}

impl Check for ArchiveTimestampValid<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ERV_ARCHIVE_TIMESTAMP_VALID
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.report.is_passed())
    }

    fn check_message(&self) -> Message {
        Message::new(self.descriptor().question).arg(self.timestamp_id)
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.timestamp_id)
    }
}

/// Each archive time-stamp after the first must reference its predecessor (adjacent mode)
/// or every earlier archive time-stamp (transitive mode) among its signed objects.
///
/// Evaluation stops at the first gap found scanning in production-time order.
pub struct ArchiveTimestampsCoverEachOther<'a> {
    ordered: Vec<&'a TimestampEvidence>,
    mode: CoverageMode,
}

impl<'a> ArchiveTimestampsCoverEachOther<'a> {
    /// Orders `timestamps` by production time (then id).
    pub fn new(mut timestamps: Vec<&'a TimestampEvidence>, mode: CoverageMode) -> Self {
        timestamps.sort_by(|a, b| {
            a.production_time
                .cmp(&b.production_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        Self {
            ordered: timestamps,
            mode,
        }
    }

    /// `(covering, uncovered)` ids of the first gap.
    pub fn first_gap(&self) -> Option<(&'a str, &'a str)> {
        for i in 1..self.ordered.len() {
            let current: &'a TimestampEvidence = self.ordered[i];
            let required = match self.mode {
                CoverageMode::Adjacent => &self.ordered[i - 1..i],
                CoverageMode::Transitive => &self.ordered[..i],
            };
            let missing = required.iter().copied().find(|prev| !current.covers(&prev.id));
            if let Some(missing) = missing {
                return Some((current.id.as_str(), missing.id.as_str()));
            }
        }
        None
    }
}

impl Check for ArchiveTimestampsCoverEachOther<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.first_gap().is_none())
    }

    fn failure_message(&self) -> Message {
        let mut message = Message::new(self.descriptor().failure);
        if let Some((current, missing)) = self.first_gap() {
            message = message.arg(current).arg(missing);
        }
        message
    }
}

pub struct FirstArchiveTimestampCoversSignature<'a> {
    pub signature_id: &'a str,
    pub first: Option<&'a TimestampEvidence>,
}

impl Check for FirstArchiveTimestampCoversSignature<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::ERV_FIRST_ARCHIVE_TIMESTAMP_COVERS_SIGNATURE
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.first.is_none_or(|ts| ts.covers(self.signature_id)))
    }

    fn failure_message(&self) -> Message {
        let first = self.first.map(|ts| ts.id.as_str()).unwrap_or("-");
        Message::new(self.descriptor().failure)
            .arg(first)
            .arg(self.signature_id)
    }
}
