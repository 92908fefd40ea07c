//! Use case orchestration for adesval.
//!
//! This crate provides the application layer: use cases that coordinate the policy and domain
//! layers. It is intentionally thin and does no file or network I/O.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod report;
mod validate;

pub use explain::{ExplainOutput, format_catalog, format_explanation, format_not_found, run_explain};
pub use report::{
    format_summary, is_policy_rejection, report_digest, serialize_report, summary_exit_code,
};
pub use validate::{ValidateInput, ValidateOutput, run_validate};
