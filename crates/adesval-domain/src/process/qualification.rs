//! Qualification of the signing certificate and of the signature.
//!
//! The certificate is qualified twice, at its issuance and at the best signature time. When
//! the two disagree the common denominator is kept. Without a best signature time or a
//! signing certificate both blocks are recorded as not evaluated.

use crate::chain::Chain;
use crate::checks::qual;
use crate::model::{CertificateEvidence, EvidenceIndex, SignatureEvidence};
use crate::policy::PolicySnapshot;
use adesval_types::{
    BlockId, BlockReport, CertificateQualification, ConstraintLevel, Conclusion,
    SignatureQualification,
};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct QualificationOutcome {
    pub qualification: SignatureQualification,
    pub blocks: Vec<BlockReport>,
}

impl QualificationOutcome {
    /// `NA`, with both qualification blocks recorded as gated by `blocked_by`.
    fn not_applicable(
        certificate_id: &str,
        signature_id: &str,
        reference_time: OffsetDateTime,
        blocked_by: BlockId,
    ) -> Self {
        Self {
            qualification: SignatureQualification::Na,
            blocks: vec![
                BlockReport::not_evaluated(
                    BlockId::QualCert,
                    certificate_id,
                    reference_time,
                    blocked_by,
                ),
                BlockReport::not_evaluated(
                    BlockId::QualSig,
                    signature_id,
                    reference_time,
                    blocked_by,
                ),
            ],
        }
    }
}

/// Certificate qualification at `snapshot.reference_time`.
pub fn qualify_certificate(
    cert: &CertificateEvidence,
    chain: &[&CertificateEvidence],
    snapshot: PolicySnapshot<'_>,
) -> (BlockReport, CertificateQualification) {
    let at = snapshot.reference_time;
    let granted = qual::granted_services(chain, at);
    let mut checks = Chain::new(BlockId::QualCert, cert.id.as_str(), snapshot);
    checks
        .push(qual::TrustedListReached { chain })
        .push(qual::ServiceGrantedAtTime {
            granted: &granted,
            at,
        })
        .push(qual::QcCompliance {
            cert,
            granted: &granted,
        })
        .push_at(
            ConstraintLevel::Inform,
            qual::ForEsig {
                cert,
                granted: &granted,
            },
        )
        .push_at(
            ConstraintLevel::Inform,
            qual::Qscd {
                cert,
                granted: &granted,
            },
        );
    let report = checks.execute();
    let qualification = if report.is_passed() {
        qual::qualification(cert, &granted)
    } else {
        CertificateQualification::NotQualified
    };
    (report, qualification)
}

pub fn determine_qualification(
    sig: &SignatureEvidence,
    index: &EvidenceIndex<'_>,
    long_term: &Conclusion,
    best_signature_time: Option<OffsetDateTime>,
    snapshot: PolicySnapshot<'_>,
) -> QualificationOutcome {
    let signing_certificate = index.signing_certificate(sig);
    let certificate_id = signing_certificate
        .as_ref()
        .ok()
        .copied()
        .flatten()
        .map_or(sig.id.as_str(), |cert| cert.id.as_str());
    let Some(best_signature_time) = best_signature_time else {
        return QualificationOutcome::not_applicable(
            certificate_id,
            &sig.id,
            snapshot.reference_time,
            BlockId::Vpbs,
        );
    };
    let (Ok(Some(cert)), Ok(chain)) = (signing_certificate, index.chain(sig)) else {
        return QualificationOutcome::not_applicable(
            certificate_id,
            &sig.id,
            snapshot.reference_time,
            BlockId::Isc,
        );
    };

    let (at_issuance_report, at_issuance) =
        qualify_certificate(cert, &chain, snapshot.at(cert.not_before));
    let (at_bst_report, at_bst) =
        qualify_certificate(cert, &chain, snapshot.at(best_signature_time));

    let at_bst_snapshot = snapshot.at(best_signature_time);
    let mut checks = Chain::new(BlockId::QualSig, sig.id.as_str(), at_bst_snapshot);
    checks
        .push(qual::IsAdes { long_term })
        .push(qual::QualifiedAtBestSignatureTime {
            qualification: at_bst,
            best_signature_time,
        })
        .push(qual::QualificationConsistent {
            at_issuance,
            at_best_signature_time: at_bst,
        });
    let signature_report = checks.execute();

    let qualification =
        SignatureQualification::determine(long_term.indication, at_issuance.common(at_bst));
    tracing::debug!(signature = %sig.id, ?qualification, "qualification determined");
    QualificationOutcome {
        qualification,
        blocks: vec![at_issuance_report, at_bst_report, signature_report],
    }
}
