//! Hierarchical result tree produced by the block composer.

use crate::conclusion::Conclusion;
use crate::indication::{ConstraintLevel, Indication};
use crate::message::Message;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Named building blocks and processes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BlockId {
    /// Format checking.
    Fc,
    /// Identification of the signing certificate.
    Isc,
    /// X.509 certificate validation.
    Xcv,
    /// Validation of one certificate of the chain.
    SubXcv,
    /// Revocation freshness checker.
    Rfc,
    /// Cryptographic verification.
    Cv,
    /// Signature acceptance validation.
    Sav,
    /// Validation process for basic signatures.
    Vpbs,
    /// Validation process for time-stamps.
    Vpftsp,
    /// Evidence record / archive time-stamp chain validation.
    Erv,
    /// Past signature validation.
    Psv,
    /// Time-stamp coherence.
    Tsc,
    /// Validation process for signatures with time and long-term validation data.
    Vpfltvd,
    QualCert,
    QualSig,
}

impl BlockId {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockId::Fc => "fc",
            BlockId::Isc => "isc",
            BlockId::Xcv => "xcv",
            BlockId::SubXcv => "sub_xcv",
            BlockId::Rfc => "rfc",
            BlockId::Cv => "cv",
            BlockId::Sav => "sav",
            BlockId::Vpbs => "vpbs",
            BlockId::Vpftsp => "vpftsp",
            BlockId::Erv => "erv",
            BlockId::Psv => "psv",
            BlockId::Tsc => "tsc",
            BlockId::Vpfltvd => "vpfltvd",
            BlockId::QualCert => "qual_cert",
            BlockId::QualSig => "qual_sig",
        }
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintStatus {
    Ok,
    NotOk,
    Warning,
    Information,
}

/// Audit record of one executed check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConstraintRecord {
    pub check_id: String,
    /// The "what is being checked" message.
    pub check: Message,
    pub level: ConstraintLevel,
    pub status: ConstraintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infos: Vec<Message>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BlockOutcome {
    Evaluated {
        constraints: Vec<ConstraintRecord>,
        conclusion: Conclusion,
    },
    /// Skipped because a required predecessor disqualified the process.
    NotEvaluated { blocked_by: BlockId },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BlockReport {
    pub block: BlockId,
    /// Signature, timestamp, certificate or revocation id this block ran against.
    pub token_id: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub reference_time: OffsetDateTime,
    pub outcome: BlockOutcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockReport>,
}

impl BlockReport {
    pub fn not_evaluated(
        block: BlockId,
        token_id: impl Into<String>,
        reference_time: OffsetDateTime,
        blocked_by: BlockId,
    ) -> Self {
        Self {
            block,
            token_id: token_id.into(),
            reference_time,
            outcome: BlockOutcome::NotEvaluated { blocked_by },
            children: Vec::new(),
        }
    }

    pub fn conclusion(&self) -> Option<&Conclusion> {
        match &self.outcome {
            BlockOutcome::Evaluated { conclusion, .. } => Some(conclusion),
            BlockOutcome::NotEvaluated { .. } => None,
        }
    }

    pub fn constraints(&self) -> &[ConstraintRecord] {
        match &self.outcome {
            BlockOutcome::Evaluated { constraints, .. } => constraints,
            BlockOutcome::NotEvaluated { .. } => &[],
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self.outcome, BlockOutcome::Evaluated { .. })
    }

    pub fn indication(&self) -> Option<Indication> {
        self.conclusion().map(|c| c.indication)
    }

    pub fn is_passed(&self) -> bool {
        self.conclusion().is_some_and(Conclusion::is_passed)
    }

    /// First direct child for `block`.
    pub fn child(&self, block: BlockId) -> Option<&BlockReport> {
        self.children.iter().find(|c| c.block == block)
    }

    /// Depth-first search including `self`.
    pub fn find(&self, block: BlockId) -> Option<&BlockReport> {
        if self.block == block {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(block))
    }

    pub fn constraint(&self, check_id: &str) -> Option<&ConstraintRecord> {
        self.constraints().iter().find(|r| r.check_id == check_id)
    }

    /// Check ids that actually executed, in order.
    pub fn executed_check_ids(&self) -> Vec<&str> {
        self.constraints()
            .iter()
            .map(|r| r.check_id.as_str())
            .collect()
    }
}
