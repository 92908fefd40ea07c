//! Shared test utilities for the adesval workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` and
//! `golden_mismatches` at runtime (not behind `#[cfg(test)]`), so a
//! `#[cfg(test)]` module inside `adesval-types` would not suffice.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the root object looks like a report envelope (has `schema`,
///    `tool`, `summary` and `signatures`).
///
/// 2. **Recursive**: `started_at` and `finished_at` are normalized at any
///    depth. Validation times and best signature times are inputs, not run
///    metadata, and are left alone.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("summary")
            && obj.contains_key("signatures");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

/// Paths at which `actual` departs from the pinned `expected` document.
///
/// Objects match when every key of `expected` matches in `actual`; keys `expected` does not
/// name are not compared. Arrays match element-wise and must have the same length. An
/// expected `null` also matches an absent key.
pub fn golden_mismatches(actual: &Value, expected: &Value) -> Vec<String> {
    let mut out = Vec::new();
    collect_mismatches(Some(actual), expected, String::new(), &mut out);
    out
}

fn collect_mismatches(actual: Option<&Value>, expected: &Value, path: String, out: &mut Vec<String>) {
    match (actual, expected) {
        (None | Some(Value::Null), Value::Null) => {}
        (None, _) => out.push(format!("{path}: missing")),
        (Some(Value::Object(actual)), Value::Object(expected)) => {
            for (key, want) in expected {
                collect_mismatches(actual.get(key), want, format!("{path}/{key}"), out);
            }
        }
        (Some(Value::Array(actual)), Value::Array(expected)) => {
            if actual.len() != expected.len() {
                out.push(format!(
                    "{path}: expected {} element(s), found {}",
                    expected.len(),
                    actual.len()
                ));
                return;
            }
            for (i, (have, want)) in actual.iter().zip(expected).enumerate() {
                collect_mismatches(Some(have), want, format!("{path}/{i}"), out);
            }
        }
        (Some(have), want) => {
            if have != want {
                out.push(format!("{path}: expected {want}, found {have}"));
            }
        }
    }
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_metadata_only() {
        let input = json!({
            "schema": "adesval.report.v1",
            "tool": { "name": "adesval", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "validation_time": "2025-01-01T00:00:00Z",
            "summary": { "signatures": 1 },
            "signatures": [
                {
                    "signature_id": "S1",
                    "best_signature_time": "2024-06-01T00:00:00Z",
                    "blocks": [{ "tool": { "version": "9.9.9" } }]
                }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "adesval");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["validation_time"], "2025-01-01T00:00:00Z");
        assert_eq!(
            result["signatures"][0]["best_signature_time"],
            "2024-06-01T00:00:00Z"
        );
        assert_eq!(result["signatures"][0]["blocks"][0]["tool"]["version"], "9.9.9");
    }

    #[test]
    fn root_without_envelope_keys_keeps_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "run": { "started_at": "2025-01-01T00:00:00Z" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["run"]["started_at"], "__TIMESTAMP__");
    }

    #[test]
    fn golden_pins_only_the_fields_it_names() {
        let actual = json!({
            "digest": "abc",
            "signatures": [{ "indication": "FAILED", "qualification": "NA" }]
        });

        assert!(golden_mismatches(&actual, &json!({
            "signatures": [{ "indication": "FAILED", "best_signature_time": null }]
        }))
        .is_empty());

        assert_eq!(
            golden_mismatches(&actual, &json!({
                "signatures": [{ "indication": "PASSED", "signing_certificate_id": "signer" }]
            })),
            vec![
                "/signatures/0/indication: expected \"PASSED\", found \"FAILED\"".to_string(),
                "/signatures/0/signing_certificate_id: missing".to_string(),
            ]
        );

        assert_eq!(
            golden_mismatches(&actual, &json!({ "signatures": [] })),
            vec!["/signatures: expected 0 element(s), found 1".to_string()]
        );
    }
}
