use thiserror::Error;

/// A policy that cannot be used. Never confused with an evidentiary outcome.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("policy is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unsupported policy schema '{0}' (expected 'adesval.policy.v1')")]
    UnknownSchema(String),

    #[error("unknown profile '{0}' (expected strict|lenient|basic)")]
    UnknownProfile(String),

    #[error("unknown check id '{0}'")]
    UnknownCheck(String),

    #[error("the level of check '{0}' is fixed by the validation process")]
    NonConfigurableCheck(String),

    #[error("invalid level '{level}' for check '{check}' (expected enforced|warn|inform|ignore)")]
    InvalidLevel { check: String, level: String },

    #[error("unknown {kind} algorithm '{name}'")]
    UnknownAlgorithm { kind: &'static str, name: String },

    #[error("invalid expiration '{value}' for algorithm '{algorithm}' (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidDate { algorithm: String, value: String },

    #[error("unknown archive_timestamp_coverage '{0}' (expected adjacent|transitive)")]
    InvalidCoverageMode(String),

    #[error("{field} must not be negative (got {value})")]
    NegativeDuration { field: &'static str, value: i64 },

    #[error("{field} must not exceed {max} seconds (got {value})")]
    DurationTooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("minimum key size for '{0}' must be greater than zero")]
    ZeroKeySize(String),

    #[error("policy accepts no digest algorithm")]
    NoDigestAccepted,

    #[error("unknown key usage '{0}'")]
    UnknownKeyUsage(String),
}
