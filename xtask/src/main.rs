//! Developer tasks (schema generation, conformance, catalog coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use adesval_app::{ValidateInput, run_validate};
use adesval_policy::Overrides;
use adesval_types::{MessageTag, explain, text};
use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().expect("Cannot determine current directory"));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Evidence fixtures shared with the CLI integration tests.
fn fixtures_dir() -> PathBuf {
    project_root()
        .join("crates")
        .join("adesval-cli")
        .join("tests")
        .join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(adesval_types::ValidationReport)
}

fn generate_policy_schema() -> schemars::Schema {
    schema_for!(adesval_policy::PolicyDocumentV1)
}

fn generate_evidence_schema() -> schemars::Schema {
    schema_for!(adesval_domain::model::DiagnosticData)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "adesval.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "adesval.policy.v1.json",
            generate: generate_policy_schema,
        },
        SchemaSpec {
            filename: "adesval.evidence.v1.json",
            generate: generate_evidence_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("schema to json")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn schema_errors(validator: &jsonschema::Validator, value: &serde_json::Value) -> Vec<String> {
    validator.iter_errors(value).map(|e| e.to_string()).collect()
}

/// Validate every evidence fixture against the evidence schema, run it through the engine,
/// validate the report against the report schema and compare with a golden report if one
/// exists next to it.
fn conform() -> anyhow::Result<()> {
    let evidence_schema = compile(generate_evidence_schema())?;
    let report_schema = compile(generate_report_schema())?;
    let mut errors = Vec::new();
    let mut checked = 0;

    let mut dirs: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read fixtures dir")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("evidence.json").exists())
        .collect();
    dirs.sort();

    for dir in dirs {
        let name = dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Err(err) = conform_fixture(&dir, &evidence_schema, &report_schema, &mut errors) {
            errors.push(format!("fixture '{name}': {err:#}"));
        }
        checked += 1;
        println!("  checked fixture '{name}'");
    }

    if checked == 0 {
        bail!("no evidence fixtures found under {}", fixtures_dir().display());
    }
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("{} conformance error(s)", errors.len());
    }
    println!("\n{checked} fixture(s) conform.");
    Ok(())
}

fn conform_fixture(
    dir: &Path,
    evidence_schema: &jsonschema::Validator,
    report_schema: &jsonschema::Validator,
    errors: &mut Vec<String>,
) -> anyhow::Result<()> {
    let evidence_text = fs::read_to_string(dir.join("evidence.json")).context("read evidence")?;
    let evidence: serde_json::Value =
        serde_json::from_str(&evidence_text).context("parse evidence")?;
    for err in schema_errors(evidence_schema, &evidence) {
        errors.push(format!("{}: evidence schema: {err}", dir.display()));
    }

    let output = run_validate(ValidateInput {
        evidence_json: &evidence_text,
        policy_text: "",
        overrides: Overrides::default(),
        validation_time: None,
    })?;
    let report = serde_json::to_value(&output.report).context("report to json")?;
    for err in schema_errors(report_schema, &report) {
        errors.push(format!("{}: report schema: {err}", dir.display()));
    }

    let golden_path = dir.join("expected.report.json");
    if golden_path.exists() {
        let golden: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&golden_path)?).context("parse golden")?;
        let actual = adesval_test_util::normalize_nondeterministic(report);
        let expected = adesval_test_util::normalize_nondeterministic(golden);
        for mismatch in adesval_test_util::golden_mismatches(&actual, &expected) {
            errors.push(format!("{}: expected.report.json {mismatch}", dir.display()));
        }
    }
    Ok(())
}

/// Every check and every message tag resolves to non-empty documentation.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for check_id in explain::all_check_ids() {
        match explain::lookup_explanation(check_id) {
            Some(exp) if exp.descriptor.description.trim().is_empty() => {
                errors.push(format!("check '{check_id}' has an empty description"));
            }
            Some(_) => {}
            None => errors.push(format!("check '{check_id}' has no explanation")),
        }
    }
    if let Err(missing) = text::validate_catalog(|tag| Some(text::default_text(tag))) {
        for tag in missing {
            errors.push(format!("message tag '{tag}' has no default text"));
        }
    }
    let orphans: Vec<&MessageTag> = MessageTag::ALL
        .iter()
        .filter(|tag| !tag.is_info() && !tag.as_str().starts_with("engine."))
        .filter(|tag| explain::lookup_explanation(tag.as_str()).is_none())
        .collect();
    for tag in orphans {
        errors.push(format!("message tag '{tag}' belongs to no check"));
    }

    if errors.is_empty() {
        println!(
            "All {} checks and {} message tags are documented.",
            explain::all_check_ids().len(),
            explain::all_tags().len()
        );
        Ok(())
    } else {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("explain coverage failed")
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixtures and generated reports against the schemas");
    eprintln!("  explain-coverage  Validate all check IDs and message tags are documented");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = args.first().map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
}
