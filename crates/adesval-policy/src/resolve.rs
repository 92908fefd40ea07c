use crate::error::PolicyError;
use crate::model::{AlgorithmEntry, PolicyDocumentV1};
use crate::{SCHEMA_POLICY_V1, presets};
use adesval_domain::model::{DigestAlgorithm, EncryptionAlgorithm, KeyUsage};
use adesval_domain::policy::{CoverageMode, ValidationPolicy};
use adesval_types::{ConstraintLevel, catalog};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub profile: String,
    pub effective: ValidationPolicy,
}

pub fn resolve_policy(
    doc: PolicyDocumentV1,
    overrides: Overrides,
) -> Result<ResolvedPolicy, PolicyError> {
    if let Some(schema) = doc.schema.as_deref()
        && schema != SCHEMA_POLICY_V1
    {
        return Err(PolicyError::UnknownSchema(schema.to_string()));
    }

    let profile = overrides
        .profile
        .or(doc.profile)
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());
    let mut effective =
        presets::preset(&profile).ok_or_else(|| PolicyError::UnknownProfile(profile.clone()))?;

    if let Some(name) = doc.name {
        effective.name = name;
    }

    // per-check overrides
    for (check_id, cc) in &doc.checks {
        let descriptor =
            catalog::lookup(check_id).ok_or_else(|| PolicyError::UnknownCheck(check_id.clone()))?;
        if !descriptor.configurable {
            return Err(PolicyError::NonConfigurableCheck(check_id.clone()));
        }
        if let Some(level) = cc.level.as_deref() {
            let level = parse_level(level).ok_or_else(|| PolicyError::InvalidLevel {
                check: check_id.clone(),
                level: level.to_string(),
            })?;
            effective.levels.insert(check_id.clone(), level);
        }
    }

    if let Some(formats) = doc.accepted_formats {
        effective.accepted_formats = formats;
    }
    if let Some(seconds) = doc.clock_skew_seconds {
        effective.clock_skew = seconds_field("clock_skew_seconds", seconds)?;
    }
    if let Some(seconds) = doc.timestamp_delay_seconds {
        effective.timestamp_delay = Some(seconds_field("timestamp_delay_seconds", seconds)?);
    }
    if let Some(seconds) = doc.revocation_max_age_seconds {
        effective.revocation_max_age =
            Some(seconds_field("revocation_max_age_seconds", seconds)?);
    }
    if let Some(mode) = doc.archive_timestamp_coverage.as_deref() {
        effective.archive_coverage = parse_coverage(mode)?;
    }
    if let Some(usages) = doc.expected_key_usage {
        effective.expected_key_usage = usages
            .iter()
            .map(|u| KeyUsage::from_str(u).map_err(|_| PolicyError::UnknownKeyUsage(u.clone())))
            .collect::<Result<_, _>>()?;
    }

    if let Some(crypto) = doc.crypto {
        if let Some(entries) = crypto.digest_algorithms {
            effective.crypto.digest_algorithms = algorithms::<DigestAlgorithm>("digest", &entries)?;
        }
        if let Some(entries) = crypto.encryption_algorithms {
            effective.crypto.encryption_algorithms =
                algorithms::<EncryptionAlgorithm>("encryption", &entries)?;
        }
        for (name, size) in crypto.min_key_sizes {
            let algorithm = EncryptionAlgorithm::from_str(&name).map_err(|_| {
                PolicyError::UnknownAlgorithm {
                    kind: "encryption",
                    name: name.clone(),
                }
            })?;
            if size == 0 {
                return Err(PolicyError::ZeroKeySize(name));
            }
            effective.crypto.min_key_sizes.insert(algorithm, size);
        }
    }
    if effective.crypto.digest_algorithms.is_empty() {
        return Err(PolicyError::NoDigestAccepted);
    }

    Ok(ResolvedPolicy { profile, effective })
}

fn parse_level(v: &str) -> Option<ConstraintLevel> {
    match v {
        "enforced" | "fail" => Some(ConstraintLevel::Enforced),
        "warn" | "warning" => Some(ConstraintLevel::Warn),
        "inform" | "info" => Some(ConstraintLevel::Inform),
        "ignore" => Some(ConstraintLevel::Ignore),
        _ => None,
    }
}

fn parse_coverage(v: &str) -> Result<CoverageMode, PolicyError> {
    match v {
        "adjacent" => Ok(CoverageMode::Adjacent),
        "transitive" => Ok(CoverageMode::Transitive),
        other => Err(PolicyError::InvalidCoverageMode(other.to_string())),
    }
}

/// Upper bound for any configured duration: one hundred years of 365 days.
pub const MAX_DURATION_SECONDS: i64 = 100 * 365 * 86_400;

fn seconds_field(field: &'static str, value: i64) -> Result<Duration, PolicyError> {
    if value < 0 {
        return Err(PolicyError::NegativeDuration { field, value });
    }
    if value > MAX_DURATION_SECONDS {
        return Err(PolicyError::DurationTooLarge {
            field,
            value,
            max: MAX_DURATION_SECONDS,
        });
    }
    Ok(Duration::seconds(value))
}

fn algorithms<A>(
    kind: &'static str,
    entries: &[AlgorithmEntry],
) -> Result<BTreeMap<A, Option<OffsetDateTime>>, PolicyError>
where
    A: FromStr + Ord,
{
    let mut out = BTreeMap::new();
    for entry in entries {
        let algorithm = A::from_str(&entry.name).map_err(|_| PolicyError::UnknownAlgorithm {
            kind,
            name: entry.name.clone(),
        })?;
        let expires = entry
            .expires
            .as_deref()
            .map(|value| parse_expiry(&entry.name, value))
            .transpose()?;
        out.insert(algorithm, expires);
    }
    Ok(out)
}

fn parse_expiry(algorithm: &str, value: &str) -> Result<OffsetDateTime, PolicyError> {
    if let Ok(t) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(t);
    }
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(|d| d.midnight().assume_utc())
        .map_err(|_| PolicyError::InvalidDate {
            algorithm: algorithm.to_string(),
            value: value.to_string(),
        })
}
