use adesval_policy::PolicyError;
use adesval_types::{
    BlockReport, Indication, SignatureReport, ValidationReport, ValidationSummary, text,
};
use anyhow::Context;
use sha2::{Digest, Sha256};

/// Hex SHA-256 over the JSON of the signature reports. Identical inputs give identical
/// digests, so two runs can be compared without diffing the trees.
pub fn report_digest(signatures: &[SignatureReport]) -> anyhow::Result<String> {
    let bytes = serde_json::to_vec(signatures).context("serialize signatures")?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Map the summary to an exit code: 0 all passed, 2 any failed, 3 any indeterminate.
pub fn summary_exit_code(summary: &ValidationSummary) -> i32 {
    match summary.overall() {
        Indication::Passed => 0,
        Indication::Failed => 2,
        Indication::Indeterminate => 3,
    }
}

/// Whether `err` was caused by a policy document the engine refused to load.
pub fn is_policy_rejection(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<PolicyError>())
}

/// One line per signature, followed by its rendered errors and warnings.
pub fn format_summary(report: &ValidationReport) -> String {
    let mut out = String::new();
    for sig in &report.signatures {
        out.push_str(&format!("{}: {}", sig.signature_id, sig.indication));
        if let Some(sub) = sig.sub_indication {
            out.push_str(&format!(" / {sub}"));
        }
        out.push_str(&format!(" [{}]\n", sig.qualification));

        if let Some(conclusion) = sig.blocks.first().and_then(BlockReport::conclusion) {
            for message in &conclusion.errors {
                out.push_str(&format!("  error: {}\n", text::render(message)));
            }
            for message in &conclusion.warnings {
                out.push_str(&format!("  warning: {}\n", text::render(message)));
            }
        }
    }
    let s = &report.summary;
    out.push_str(&format!(
        "{} signature(s): {} passed, {} failed, {} indeterminate\n",
        s.signatures, s.passed, s.failed, s.indeterminate
    ));
    out
}
