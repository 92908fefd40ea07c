//! Explain registry for checks and message tags.
//!
//! Maps check IDs and message tags to the descriptor of the check that owns them, together
//! with the default English text of both tags.

use crate::catalog::{self, CheckDescriptor};
use crate::message::MessageTag;
use crate::text;

/// Explanation entry for a check or tag.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub descriptor: &'static CheckDescriptor,
    /// Default text of the question tag.
    pub question_text: &'static str,
    /// Default text of the failure tag.
    pub failure_text: &'static str,
}

/// Look up an explanation by check id or message tag (`<check id>.ans`).
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    let descriptor = catalog::lookup(identifier).or_else(|| {
        identifier
            .parse::<MessageTag>()
            .ok()
            .and_then(catalog::lookup_by_tag)
    })?;
    Some(Explanation {
        descriptor,
        question_text: text::default_text(descriptor.question),
        failure_text: text::default_text(descriptor.failure),
    })
}

/// List all known check IDs.
pub fn all_check_ids() -> Vec<&'static str> {
    catalog::CATALOG.iter().map(|d| d.id).collect()
}

/// List all known message tags.
pub fn all_tags() -> Vec<&'static str> {
    MessageTag::ALL.iter().map(|t| t.as_str()).collect()
}
