//! Validation processes built from the building blocks.

use crate::check::EvidenceFault;
use adesval_types::{BlockId, BlockOutcome, BlockReport, Conclusion, Indication, SubIndication};
use time::OffsetDateTime;

pub mod archive;
pub mod basic;
pub mod long_term;
pub mod qualification;
pub mod timestamp;

/// Report for a block whose chain could not be built from the evidence.
pub(crate) fn fault_report(
    block: BlockId,
    token_id: &str,
    reference_time: OffsetDateTime,
    fault: &EvidenceFault,
) -> BlockReport {
    tracing::warn!(block = %block, token = token_id, %fault, "evidence contract violation");
    BlockReport {
        block,
        token_id: token_id.to_string(),
        reference_time,
        outcome: BlockOutcome::Evaluated {
            constraints: Vec::new(),
            conclusion: fault.conclusion(),
        },
        children: Vec::new(),
    }
}

/// Conclusion of a report produced by a composer or chain. Those are always evaluated.
pub(crate) fn conclusion_of(report: &BlockReport) -> Conclusion {
    report.conclusion().cloned().unwrap_or_else(|| {
        Conclusion::disqualified(Indication::Indeterminate, SubIndication::Generic)
    })
}

#[cfg(test)]
mod tests;
