//! The `validate` use case: resolve a policy, validate the evidence, produce a report.

use adesval_domain::model::DiagnosticData;
use adesval_policy::{Overrides, PolicyDocumentV1, ResolvedPolicy};
use adesval_types::{
    MESSAGE_TABLE_VERSION, SCHEMA_REPORT_V1, ToolMeta, ValidationReport, ValidationSummary, text,
};
use anyhow::Context;
use time::OffsetDateTime;

use crate::report::report_digest;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Evidence (diagnostic data) as JSON.
    pub evidence_json: &'a str,
    /// Policy document contents (empty string if none was given).
    pub policy_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Wins over the evidence's own validation time; falls back to now.
    pub validation_time: Option<OffsetDateTime>,
}

/// Output from the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateOutput {
    pub report: ValidationReport,
    /// The resolved policy used.
    pub resolved_policy: ResolvedPolicy,
}

/// Run the validate use case. Policy faults are reported before any evidence is looked at.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    let started_at = OffsetDateTime::now_utc();

    text::validate_catalog(|tag| Some(text::default_text(tag)))
        .map_err(|missing| anyhow::anyhow!("message table has no text for {missing:?}"))?;

    // Empty policy is allowed, the default profile applies.
    let doc = if input.policy_text.trim().is_empty() {
        PolicyDocumentV1::default()
    } else {
        adesval_policy::parse_policy_toml(input.policy_text).context("parse policy")?
    };
    let resolved = adesval_policy::resolve_policy(doc, input.overrides).context("resolve policy")?;

    let data: DiagnosticData =
        serde_json::from_str(input.evidence_json).context("parse evidence json")?;
    let validation_time = input
        .validation_time
        .or(data.validation_time)
        .unwrap_or(started_at);

    tracing::debug!(
        profile = %resolved.profile,
        signatures = data.signatures.len(),
        %validation_time,
        "validating"
    );
    let signatures = adesval_domain::validate(&data, &resolved.effective, validation_time);
    let summary = ValidationSummary::from_signatures(&signatures);
    let digest = report_digest(&signatures).context("digest signatures")?;
    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        indeterminate = summary.indeterminate,
        "validation finished"
    );

    let report = ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "adesval".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        validation_time,
        policy: resolved.effective.name.clone(),
        message_table_version: MESSAGE_TABLE_VERSION,
        summary,
        signatures,
        digest,
    };

    Ok(ValidateOutput {
        report,
        resolved_policy: resolved,
    })
}
