//! Conformance tests for adesval.
//!
//! These tests validate:
//! 1. Every check id and message tag is explainable
//! 2. Fixture evidence parses into the evidence model
//! 3. Generated reports conform to the report JSON Schema

use adesval_domain::model::DiagnosticData;
use adesval_types::{MessageTag, ValidationReport, explain, text};
use assert_cmd::Command;
use schemars::schema_for;
use serde_json::Value;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn evidence_fixtures() -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = std::fs::read_dir(fixtures_dir())
        .expect("read fixtures dir")
        .map(|entry| entry.expect("entry").path().join("evidence.json"))
        .filter(|path| path.exists())
        .collect();
    out.sort();
    out
}

// =============================================================================
// Explanation coverage
// =============================================================================

#[test]
fn all_check_ids_have_explanations() {
    for check_id in explain::all_check_ids() {
        let exp = explain::lookup_explanation(check_id)
            .unwrap_or_else(|| panic!("check id '{check_id}' has no explanation"));
        assert!(!exp.descriptor.title.is_empty(), "'{check_id}' has empty title");
        assert!(!exp.question_text.is_empty(), "'{check_id}' has no question text");
        assert!(!exp.failure_text.is_empty(), "'{check_id}' has no failure text");
    }
}

#[test]
fn every_message_tag_has_default_text() {
    for tag in MessageTag::ALL {
        assert!(
            !text::default_text(*tag).trim().is_empty(),
            "tag '{tag}' has no default text"
        );
    }
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn all_evidence_fixtures_parse() {
    let fixtures = evidence_fixtures();
    assert!(fixtures.len() >= 4, "expected evidence fixtures");
    for path in fixtures {
        let text = std::fs::read_to_string(&path).expect("read fixture");
        let data: DiagnosticData = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("{} does not parse: {e}", path.display()));
        assert!(!data.signatures.is_empty(), "{} has no signature", path.display());
    }
}

// =============================================================================
// Report schema
// =============================================================================

#[allow(deprecated)]
#[test]
fn generated_reports_conform_to_schema() {
    let schema = serde_json::to_value(schema_for!(ValidationReport)).expect("schema json");
    let validator = jsonschema::validator_for(&schema).expect("compile schema");

    let tmp = tempfile::tempdir().expect("tempdir");
    for (i, evidence) in evidence_fixtures().into_iter().enumerate() {
        let out = tmp.path().join(format!("report-{i}.json"));
        let _ = Command::cargo_bin("adesval")
            .unwrap()
            .arg("validate")
            .arg("--evidence")
            .arg(&evidence)
            .arg("--report-out")
            .arg(&out)
            .assert();

        let text = std::fs::read_to_string(&out).expect("read report");
        let report: Value = serde_json::from_str(&text).expect("report json");
        let errors: Vec<String> = validator
            .iter_errors(&report)
            .map(|e| e.to_string())
            .collect();
        assert!(
            errors.is_empty(),
            "{} produced a non-conforming report: {errors:?}",
            evidence.display()
        );

        let typed: ValidationReport = serde_json::from_value(report).expect("typed report");
        assert_eq!(typed.summary.signatures as usize, typed.signatures.len());
    }
}
