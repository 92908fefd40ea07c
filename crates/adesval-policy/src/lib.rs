//! Constraint policy parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves policy documents provided as
//! strings. Every fault is reported before any chain runs.

#![forbid(unsafe_code)]

mod error;
mod model;
mod presets;
mod resolve;

pub use error::PolicyError;
pub use model::{AlgorithmEntry, CheckConfig, CryptoConfig, PolicyDocumentV1};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{MAX_DURATION_SECONDS, Overrides, ResolvedPolicy};

/// Stable schema identifier for policy documents.
pub const SCHEMA_POLICY_V1: &str = "adesval.policy.v1";

/// Parse a policy document (TOML) into a typed model.
pub fn parse_policy_toml(input: &str) -> Result<PolicyDocumentV1, PolicyError> {
    let doc: PolicyDocumentV1 = toml::from_str(input)?;
    Ok(doc)
}

/// Resolve the immutable policy used by the engine (profile + overrides + document).
pub fn resolve_policy(
    doc: PolicyDocumentV1,
    overrides: Overrides,
) -> Result<ResolvedPolicy, PolicyError> {
    resolve::resolve_policy(doc, overrides)
}
