//! Concrete checks, grouped by the building block that runs them.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub mod crypto;
pub mod cv;
pub mod erv;
pub mod fc;
pub mod isc;
pub mod qual;
pub mod rfc;
pub mod sav;
pub mod tsc;
pub mod xcv;

#[cfg(test)]
mod tests;

/// Message argument rendering of an instant.
pub(crate) fn format_time(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}
