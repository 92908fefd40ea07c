use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy document schema v1.
///
/// This is a *user-facing* model: every field is optional and falls back to the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocumentV1 {
    /// Optional schema string for tooling (`adesval.policy.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `strict` (default), `lenient` or `basic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Display name recorded in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,

    /// Accepted signature formats; empty accepts any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_formats: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_skew_seconds: Option<i64>,

    /// Maximum delay between claimed signing time and best signature time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_delay_seconds: Option<i64>,

    /// Maximum age of revocation data; absent means fresh until `nextUpdate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_max_age_seconds: Option<i64>,

    /// `adjacent` (default) or `transitive`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_timestamp_coverage: Option<String>,

    /// Key usages, one of which the signing certificate must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_key_usage: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto: Option<CryptoConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// `enforced`, `warn`, `inform` or `ignore` (aliases: `fail`, `warning`, `info`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CryptoConfig {
    /// Replaces the profile's digest list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_algorithms: Option<Vec<AlgorithmEntry>>,

    /// Replaces the profile's encryption list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_algorithms: Option<Vec<AlgorithmEntry>>,

    /// Merged over the profile's floors, e.g. `RSA = 2048`.
    #[serde(default)]
    pub min_key_sizes: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AlgorithmEntry {
    pub name: String,
    /// RFC 3339 instant or `YYYY-MM-DD`; the algorithm is rejected from then on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}
