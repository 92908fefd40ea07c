use crate::block::BlockReport;
use crate::indication::{Indication, SubIndication};
use crate::qualification::SignatureQualification;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for adesval reports.
pub const SCHEMA_REPORT_V1: &str = "adesval.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Verdict for one signature plus the full block tree that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignatureReport {
    pub signature_id: String,
    pub indication: Indication,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub best_signature_time: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_certificate_id: Option<String>,
    pub qualification: SignatureQualification,
    pub blocks: Vec<BlockReport>,
}

impl SignatureReport {
    pub fn block(&self, block: crate::block::BlockId) -> Option<&BlockReport> {
        self.blocks.iter().find_map(|b| b.find(block))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationSummary {
    pub signatures: u32,
    pub passed: u32,
    pub failed: u32,
    pub indeterminate: u32,
}

impl ValidationSummary {
    pub fn from_signatures(signatures: &[SignatureReport]) -> Self {
        let mut out = ValidationSummary::default();
        for sig in signatures {
            out.signatures += 1;
            match sig.indication {
                Indication::Passed => out.passed += 1,
                Indication::Failed => out.failed += 1,
                Indication::Indeterminate => out.indeterminate += 1,
            }
        }
        out
    }

    /// Worst indication across all signatures; `PASSED` when there are none.
    pub fn overall(&self) -> Indication {
        if self.failed > 0 {
            Indication::Failed
        } else if self.indeterminate > 0 {
            Indication::Indeterminate
        } else {
            Indication::Passed
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub validation_time: OffsetDateTime,
    pub policy: String,
    pub message_table_version: u32,
    pub summary: ValidationSummary,
    pub signatures: Vec<SignatureReport>,
    /// Hex SHA-256 of the canonical JSON of `signatures`.
    pub digest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(indication: Indication) -> SignatureReport {
        SignatureReport {
            signature_id: "S".into(),
            indication,
            sub_indication: None,
            best_signature_time: None,
            signing_certificate_id: None,
            qualification: SignatureQualification::Na,
            blocks: Vec::new(),
        }
    }

    #[test]
    fn summary_counts_and_overall() {
        let sigs = vec![
            sig(Indication::Passed),
            sig(Indication::Indeterminate),
            sig(Indication::Passed),
        ];
        let summary = ValidationSummary::from_signatures(&sigs);
        assert_eq!(summary.signatures, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.indeterminate, 1);
        assert_eq!(summary.overall(), Indication::Indeterminate);

        let summary = ValidationSummary::from_signatures(&[sig(Indication::Failed)]);
        assert_eq!(summary.overall(), Indication::Failed);
        assert_eq!(
            ValidationSummary::default().overall(),
            Indication::Passed
        );
    }
}
