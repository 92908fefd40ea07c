//! Basic building blocks and the validation process for basic signatures.

use super::fault_report;
use crate::chain::Chain;
use crate::checks::crypto::CryptoConstraintsCheck;
use crate::checks::{cv, fc, isc, rfc, sav, xcv};
use crate::composer::{Composer, Requirement};
use crate::model::{
    CertificateEvidence, EvidenceIndex, RevocationEvidence, SignatureEvidence, Token, TokenKind,
};
use crate::policy::PolicySnapshot;
use adesval_types::{BlockId, BlockReport, ConstraintLevel, catalog};
use rayon::prelude::*;

pub fn format_checking(sig: &SignatureEvidence, snapshot: PolicySnapshot<'_>) -> BlockReport {
    let mut chain = Chain::new(BlockId::Fc, sig.id.as_str(), snapshot);
    chain
        .push(fc::FormatAccepted {
            format: &sig.format,
            accepted: &snapshot.policy.accepted_formats,
        })
        .push(fc::StructureValid {
            valid: sig.structurally_valid,
        });
    chain.execute()
}

pub fn identify_signing_certificate(
    token: &dyn Token,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let reference = token.signing_certificate();
    let mut chain = Chain::new(BlockId::Isc, token.id(), snapshot);
    chain
        .push(isc::SigningCertificateIdentified { token, index })
        .push(isc::SigningCertificateReferencePresent { reference })
        .push(isc::SigningCertificateDigestMatch { reference })
        .push(isc::IssuerSerialMatch { reference });
    chain.execute()
}

/// X.509 validation of the token's chain. Every certificate before the trust anchor gets its
/// own sub-validation; those run in parallel and are attached as the chain reaches them.
pub fn certificate_validation(
    token: &dyn Token,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let certificates = match index.chain(token) {
        Ok(certificates) => certificates,
        Err(fault) => {
            return fault_report(BlockId::Xcv, token.id(), snapshot.reference_time, &fault);
        }
    };
    let to_validate: Vec<&CertificateEvidence> = certificates
        .iter()
        .copied()
        .take_while(|c| !c.trusted)
        .collect();
    let sub_reports: Vec<BlockReport> = to_validate
        .par_iter()
        .enumerate()
        .map(|(position, cert)| {
            certificate_sub_validation(token.kind(), cert, position == 0, index, snapshot)
        })
        .collect();

    let mut chain = Chain::new(BlockId::Xcv, token.id(), snapshot);
    chain
        .push(xcv::ChainPresent {
            token_id: token.id(),
            chain: token.certificate_chain(),
        })
        .push(xcv::TrustAnchorReached {
            token_id: token.id(),
            chain: token.certificate_chain(),
            index,
        });
    for (cert, report) in to_validate.iter().zip(sub_reports) {
        chain.push_at(
            ConstraintLevel::Enforced,
            xcv::CertificateValid {
                certificate_id: &cert.id,
                report,
            },
        );
    }
    chain.execute()
}

pub fn certificate_sub_validation(
    token_kind: TokenKind,
    cert: &CertificateEvidence,
    is_signing_certificate: bool,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let revocations = index.revocations_for(&cert.id);
    let latest = index.latest_revocation(&cert.id);
    let freshness = latest.map(|rev| revocation_freshness(rev, snapshot));

    let mut chain = Chain::new(BlockId::SubXcv, cert.id.as_str(), snapshot);
    chain
        .push(xcv::CertificateSignatureIntact { cert })
        .push(xcv::RevocationDataPresent { cert, revocations })
        .push(xcv::RevocationFresh {
            cert,
            rfc: freshness,
        })
        .push(xcv::NotRevoked {
            cert,
            is_signing_certificate,
            latest_revocation: latest,
            at: snapshot.reference_time,
        })
        .push(xcv::ValidityRange {
            cert,
            latest_revocation: latest,
            at: snapshot.reference_time,
        })
        .push(CryptoConstraintsCheck {
            descriptor: &catalog::SUB_XCV_CRYPTO_CONSTRAINTS,
            subject_id: &cert.id,
            algorithm: &cert.algorithm,
            constraints: &snapshot.policy.crypto,
            at: snapshot.reference_time,
        });
    if is_signing_certificate {
        match token_kind {
            TokenKind::Signature => {
                chain.push(xcv::SigningKeyUsage {
                    cert,
                    expected: &snapshot.policy.expected_key_usage,
                });
            }
            TokenKind::Timestamp => {
                chain.push(xcv::TimestampingEku { cert });
            }
        }
    }
    chain.execute()
}

pub fn revocation_freshness(
    revocation: &RevocationEvidence,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let mut chain = Chain::new(BlockId::Rfc, revocation.id.as_str(), snapshot);
    chain
        .push(rfc::RevocationSignatureIntact { revocation })
        .push(rfc::NextUpdatePresent { revocation })
        .push(rfc::RevocationFresh {
            revocation,
            max_age: snapshot.policy.revocation_max_age,
            at: snapshot.reference_time,
        });
    chain.execute()
}

pub fn cryptographic_verification(token: &dyn Token, snapshot: PolicySnapshot<'_>) -> BlockReport {
    let matchers = token.digest_matchers();
    let mut chain = Chain::new(BlockId::Cv, token.id(), snapshot);
    chain
        .push(cv::ReferenceDataFound {
            token_id: token.id(),
            matchers,
        })
        .push(cv::ReferenceDataIntact {
            token_id: token.id(),
            matchers,
        })
        .push(cv::SignatureIntact {
            token_id: token.id(),
            intact: token.signature_intact(),
        });
    chain.execute()
}

pub fn signature_acceptance(sig: &SignatureEvidence, snapshot: PolicySnapshot<'_>) -> BlockReport {
    let mut chain = Chain::new(BlockId::Sav, sig.id.as_str(), snapshot);
    chain
        .push(sav::SigningTimePresent {
            claimed_signing_time: sig.claimed_signing_time,
        })
        .push(sav::MessageDigestOrSignedPropertiesPresent {
            token_id: &sig.id,
            matchers: sig.digest_matchers.as_deref(),
        })
        .push(sav::ContentTypePresent {
            content_type: sig.content_type.as_deref(),
        })
        .push(CryptoConstraintsCheck {
            descriptor: &catalog::SAV_CRYPTO_CONSTRAINTS,
            subject_id: &sig.id,
            algorithm: &sig.algorithm,
            constraints: &snapshot.policy.crypto,
            at: snapshot.reference_time,
        });
    chain.execute()
}

/// Validation process for basic signatures: fc, isc, xcv, cv, sav.
pub fn validate_basic(
    sig: &SignatureEvidence,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let mut composer = Composer::new(BlockId::Vpbs, sig.id.as_str(), snapshot.reference_time);
    composer.run(BlockId::Fc, &[], |_| format_checking(sig, snapshot));
    composer.run(BlockId::Isc, &[Requirement::Passed(BlockId::Fc)], |_| {
        identify_signing_certificate(sig, index, snapshot)
    });
    composer.run(BlockId::Xcv, &[Requirement::Passed(BlockId::Isc)], |_| {
        certificate_validation(sig, index, snapshot)
    });
    composer.run(BlockId::Cv, &[Requirement::Passed(BlockId::Isc)], |_| {
        cryptographic_verification(sig, snapshot)
    });
    composer.run(BlockId::Sav, &[Requirement::NotFailed(BlockId::Cv)], |_| {
        signature_acceptance(sig, snapshot)
    });
    composer.finish()
}

/// One past-signature-validation run: the time-dependent blocks re-evaluated at the
/// snapshot's reference time.
pub fn past_signature_validation(
    sig: &SignatureEvidence,
    index: &EvidenceIndex<'_>,
    snapshot: PolicySnapshot<'_>,
) -> BlockReport {
    let mut composer = Composer::new(BlockId::Psv, sig.id.as_str(), snapshot.reference_time);
    composer.run(BlockId::Xcv, &[], |_| certificate_validation(sig, index, snapshot));
    composer.run(BlockId::Sav, &[], |_| signature_acceptance(sig, snapshot));
    composer.finish()
}
