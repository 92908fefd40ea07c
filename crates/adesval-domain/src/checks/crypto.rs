//! Algorithm acceptability, shared by certificate and token validation.

use super::format_time;
use crate::check::{Check, EvidenceFault};
use crate::model::AlgorithmEvidence;
use crate::policy::CryptoConstraints;
use adesval_types::{CheckDescriptor, Message, MessageTag};
use time::OffsetDateTime;

pub struct CryptoConstraintsCheck<'a> {
    pub descriptor: &'static CheckDescriptor,
    /// Certificate or token the algorithm belongs to.
    pub subject_id: &'a str,
    pub algorithm: &'a AlgorithmEvidence,
    pub constraints: &'a CryptoConstraints,
    pub at: OffsetDateTime,
}

impl Check for CryptoConstraintsCheck<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        self.descriptor
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.constraints.evaluate(self.algorithm, self.at).is_ok())
    }

    fn failure_message(&self) -> Message {
        let algorithm = match self.constraints.evaluate(self.algorithm, self.at) {
            Err(violation) => violation.algorithm_label(),
            Ok(_) => self.algorithm.to_string(),
        };
        Message::new(self.descriptor.failure)
            .arg(algorithm)
            .arg(self.subject_id)
            .arg(format_time(self.at))
    }

    fn success_infos(&self) -> Vec<Message> {
        match self.constraints.evaluate(self.algorithm, self.at) {
            Ok(Some(expiry)) => vec![
                Message::new(MessageTag::InfoAlgorithmExpires)
                    .arg(self.algorithm.to_string())
                    .arg(format_time(expiry)),
            ],
            _ => Vec::new(),
        }
    }
}
