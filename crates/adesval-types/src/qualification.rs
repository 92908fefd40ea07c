use crate::indication::Indication;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualification of a signing certificate at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateQualification {
    QcForEsigQscd,
    QcForEsig,
    QcForEsealQscd,
    QcForEseal,
    QcForWebAuth,
    NotQualified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Purpose {
    Esig,
    Eseal,
    WebAuth,
}

impl CertificateQualification {
    fn parts(self) -> Option<(Purpose, bool)> {
        match self {
            CertificateQualification::QcForEsigQscd => Some((Purpose::Esig, true)),
            CertificateQualification::QcForEsig => Some((Purpose::Esig, false)),
            CertificateQualification::QcForEsealQscd => Some((Purpose::Eseal, true)),
            CertificateQualification::QcForEseal => Some((Purpose::Eseal, false)),
            CertificateQualification::QcForWebAuth => Some((Purpose::WebAuth, false)),
            CertificateQualification::NotQualified => None,
        }
    }

    fn from_parts(purpose: Purpose, qscd: bool) -> Self {
        match (purpose, qscd) {
            (Purpose::Esig, true) => CertificateQualification::QcForEsigQscd,
            (Purpose::Esig, false) => CertificateQualification::QcForEsig,
            (Purpose::Eseal, true) => CertificateQualification::QcForEsealQscd,
            (Purpose::Eseal, false) => CertificateQualification::QcForEseal,
            (Purpose::WebAuth, _) => CertificateQualification::QcForWebAuth,
        }
    }

    /// Builds a qualification from its three determining properties.
    pub fn determine(qualified: bool, for_esig: bool, qscd: bool) -> Self {
        if !qualified {
            return CertificateQualification::NotQualified;
        }
        let purpose = if for_esig { Purpose::Esig } else { Purpose::Eseal };
        Self::from_parts(purpose, qscd)
    }

    pub fn is_qualified(self) -> bool {
        self.parts().is_some()
    }

    pub fn is_for_esig(self) -> bool {
        matches!(self.parts(), Some((Purpose::Esig, _)))
    }

    pub fn is_qscd(self) -> bool {
        matches!(self.parts(), Some((_, true)))
    }

    /// Weakest qualification both values agree on.
    pub fn common(self, other: Self) -> Self {
        if self == other {
            return self;
        }
        match (self.parts(), other.parts()) {
            (Some((a, qa)), Some((b, qb))) if a == b => Self::from_parts(a, qa && qb),
            _ => CertificateQualification::NotQualified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CertificateQualification::QcForEsigQscd => "QC for eSig with QSCD",
            CertificateQualification::QcForEsig => "QC for eSig",
            CertificateQualification::QcForEsealQscd => "QC for eSeal with QSCD",
            CertificateQualification::QcForEseal => "QC for eSeal",
            CertificateQualification::QcForWebAuth => "QC for website authentication",
            CertificateQualification::NotQualified => "Not qualified",
        }
    }
}

impl fmt::Display for CertificateQualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualification level of a signature (eIDAS terminology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureQualification {
    Qes,
    AdesQc,
    Ades,
    IndeterminateQes,
    IndeterminateAdesQc,
    IndeterminateAdes,
    NotAdesQcQscd,
    NotAdesQc,
    NotAdes,
    /// Not applicable: qualification was not determined.
    Na,
}

impl SignatureQualification {
    pub fn determine(indication: Indication, certificate: CertificateQualification) -> Self {
        let qc = certificate.is_qualified() && certificate.is_for_esig();
        let qscd = qc && certificate.is_qscd();
        match (indication, qc, qscd) {
            (Indication::Passed, true, true) => SignatureQualification::Qes,
            (Indication::Passed, true, false) => SignatureQualification::AdesQc,
            (Indication::Passed, false, _) => SignatureQualification::Ades,
            (Indication::Indeterminate, true, true) => SignatureQualification::IndeterminateQes,
            (Indication::Indeterminate, true, false) => {
                SignatureQualification::IndeterminateAdesQc
            }
            (Indication::Indeterminate, false, _) => SignatureQualification::IndeterminateAdes,
            (Indication::Failed, true, true) => SignatureQualification::NotAdesQcQscd,
            (Indication::Failed, true, false) => SignatureQualification::NotAdesQc,
            (Indication::Failed, false, _) => SignatureQualification::NotAdes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignatureQualification::Qes => "QES",
            SignatureQualification::AdesQc => "ADES_QC",
            SignatureQualification::Ades => "ADES",
            SignatureQualification::IndeterminateQes => "INDETERMINATE_QES",
            SignatureQualification::IndeterminateAdesQc => "INDETERMINATE_ADES_QC",
            SignatureQualification::IndeterminateAdes => "INDETERMINATE_ADES",
            SignatureQualification::NotAdesQcQscd => "NOT_ADES_QC_QSCD",
            SignatureQualification::NotAdesQc => "NOT_ADES_QC",
            SignatureQualification::NotAdes => "NOT_ADES",
            SignatureQualification::Na => "NA",
        }
    }
}

impl fmt::Display for SignatureQualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
