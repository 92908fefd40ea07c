//! Evidence record validation: the archive time-stamp chain of one signature.

use crate::chain::Chain;
use crate::checks::erv;
use crate::model::{SignatureEvidence, TimestampEvidence};
use crate::policy::PolicySnapshot;
use adesval_types::{BlockId, BlockReport, ConstraintLevel};

/// `archives` pairs each archive time-stamp with its own validation report.
///
/// Every archive time-stamp must be valid; the coverage checks then run over the chain
/// ordered by production time.
pub fn validate_archive_chain(
    sig: &SignatureEvidence,
    archives: &[(&TimestampEvidence, &BlockReport)],
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let mut ordered: Vec<&TimestampEvidence> = archives.iter().map(|(ts, _)| *ts).collect();
    ordered.sort_by(|a, b| a.production_time.cmp(&b.production_time).then(a.id.cmp(&b.id)));

    let mut chain = Chain::new(BlockId::Erv, sig.id.as_str(), snapshot);
    for &(ts, report) in archives {
        chain.push_at(
            ConstraintLevel::Enforced,
            erv::ArchiveTimestampValid {
                timestamp_id: &ts.id,
                report,
            },
        );
    }
    chain
        .push(erv::ArchiveTimestampsCoverEachOther::new(
            ordered.clone(),
            snapshot.policy.archive_coverage,
        ))
        .push(erv::FirstArchiveTimestampCoversSignature {
            signature_id: &sig.id,
            first: ordered.first().copied(),
        });
    chain.execute()
}
