//! The atomic unit of evaluation.

use adesval_types::{
    BlockReport, CheckDescriptor, Conclusion, Indication, Message, MessageTag, SubIndication,
};
use thiserror::Error;

/// Evidence that violates the model's structural contract (dangling ids, missing lists).
///
/// Never escapes a chain: the chain treats it as a failure of the check whose verdict is
/// `INDETERMINATE/EVIDENCE_STRUCTURE_FAILURE`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EvidenceFault {
    #[error("certificate '{id}' is referenced but not present")]
    UnknownCertificate { id: String },
    #[error("timestamp '{id}' is referenced but not present")]
    UnknownTimestamp { id: String },
    #[error("certificate id '{id}' is used by more than one certificate")]
    DuplicateCertificate { id: String },
    #[error("timestamp id '{id}' is used by more than one timestamp")]
    DuplicateTimestamp { id: String },
    #[error("{token} has no digest matcher list")]
    MissingDigestMatchers { token: String },
    #[error("revocation '{revocation_id}' is revoked without a revocation time")]
    MissingRevocationTime { revocation_id: String },
    #[error("{0}")]
    Inconsistent(String),
}

impl EvidenceFault {
    pub fn message(&self) -> Message {
        Message::new(MessageTag::EvidenceStructureViolation).arg(self.to_string())
    }

    /// Terminal conclusion for processes that cannot even build their chains.
    pub fn conclusion(&self) -> Conclusion {
        let mut c = Conclusion::disqualified(
            Indication::Indeterminate,
            SubIndication::EvidenceStructureFailure,
        );
        c.errors.push(self.message());
        c
    }
}

/// One required property of the evidence.
///
/// Implementations close over the evidence fragment and policy parameters they need; the
/// chain supplies the constraint level and records the outcome.
pub trait Check {
    fn descriptor(&self) -> &'static CheckDescriptor;

    /// Pure. `Err` only for evidence-contract violations.
    fn evaluate(&self) -> Result<bool, EvidenceFault>;

    /// "What is being checked".
    fn check_message(&self) -> Message {
        Message::new(self.descriptor().question)
    }

    /// "Why it failed".
    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure)
    }

    fn failure_indication(&self) -> Indication {
        self.descriptor().indication
    }

    fn failure_sub_indication(&self) -> SubIndication {
        self.descriptor().sub_indication()
    }

    /// Informational messages appended when the check passes.
    fn success_infos(&self) -> Vec<Message> {
        Vec::new()
    }

    /// Sub-block whose conclusion this check wraps, attached to the chain's report when the
    /// check executes.
    fn child_report(&self) -> Option<&BlockReport> {
        None
    }
}
