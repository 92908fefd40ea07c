//! The `explain` use case: look up check and message tag documentation.

use adesval_types::catalog;
use adesval_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available check ids.
    NotFound {
        identifier: String,
        available_check_ids: Vec<&'static str>,
    },
}

/// Look up an explanation for a check id or message tag.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let d = exp.descriptor;
    let mut out = String::new();

    out.push_str(d.title);
    out.push('\n');
    out.push_str(&"=".repeat(d.title.len()));
    out.push_str("\n\n");
    out.push_str(d.description);
    out.push_str("\n\n");
    out.push_str(&format!("Check id:  {}\n", d.id));
    out.push_str(&format!("Block:     {}\n", d.block));
    out.push_str(&format!(
        "Verdict:   {} / {}\n",
        d.indication,
        d.sub_indication()
    ));
    if d.sub_indications.len() > 1 {
        let others: Vec<&str> = d.sub_indications[1..].iter().map(|s| s.as_str()).collect();
        out.push_str(&format!("Also:      {}\n", others.join(", ")));
    }
    if !d.configurable {
        out.push_str("Level:     fixed by the validation process\n");
    }
    out.push('\n');
    out.push_str("Messages\n");
    out.push_str("--------\n");
    out.push_str(&format!("{}: {}\n", d.question, exp.question_text));
    out.push_str(&format!("{}: {}\n", d.failure, exp.failure_text));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check id or message tag: {}\n\n", identifier));
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

/// Every check, grouped by block in catalog order.
pub fn format_catalog() -> String {
    let mut out = String::new();
    let mut current = None;
    for d in catalog::CATALOG {
        if current != Some(d.block) {
            out.push_str(&format!("{}\n", d.block));
            current = Some(d.block);
        }
        out.push_str(&format!("  {:<50} {}\n", d.id, d.title));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use adesval_types::ids;

    #[test]
    fn explain_known_check_id() {
        let output = run_explain(ids::CHECK_ERV_ARCHIVE_TIMESTAMPS_COVER_EACH_OTHER);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_tag() {
        let output = run_explain("sav.crypto_constraints.ans");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let (identifier, available_check_ids) = unwrap_not_found(output);
        assert_eq!(identifier, "not_a_real_thing");
        assert!(available_check_ids.contains(&ids::CHECK_CV_SIGNATURE_INTACT));
    }

    #[test]
    fn format_explanation_output() {
        let exp = unwrap_found(run_explain(ids::CHECK_CV_SIGNATURE_INTACT));
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Messages"));
        assert!(formatted.contains("FAILED / SIG_CRYPTO_FAILURE"));
        assert!(formatted.contains("cv.signature_intact.ans"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["check.one", "check.two"]);
        assert!(formatted.contains("Unknown check id or message tag: missing"));
        assert!(formatted.contains("check.one"));
        assert!(formatted.contains("check.two"));
    }

    #[test]
    fn catalog_lists_every_check() {
        let formatted = format_catalog();
        for d in catalog::CATALOG {
            assert!(formatted.contains(d.id), "missing {}", d.id);
        }
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    fn unwrap_not_found(output: ExplainOutput) -> (String, Vec<&'static str>) {
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
            } => (identifier, available_check_ids),
            _ => panic!("expected NotFound"),
        }
    }
}
