use crate::indication::{Indication, SubIndication};
use crate::message::Message;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Verdict accumulated by one chain execution.
///
/// `sub_indication` is present exactly when `indication` is not `PASSED`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conclusion {
    pub indication: Indication,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_indication: Option<SubIndication>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Message>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infos: Vec<Message>,
}

impl Default for Conclusion {
    fn default() -> Self {
        Self::passed()
    }
}

impl Conclusion {
    pub fn passed() -> Self {
        Self {
            indication: Indication::Passed,
            sub_indication: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    pub fn disqualified(indication: Indication, sub_indication: SubIndication) -> Self {
        debug_assert!(indication != Indication::Passed);
        Self {
            indication,
            sub_indication: Some(sub_indication),
            ..Self::passed()
        }
    }

    pub fn is_passed(&self) -> bool {
        self.indication == Indication::Passed
    }

    pub fn is_failed(&self) -> bool {
        self.indication == Indication::Failed
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indication == Indication::Indeterminate
    }

    /// Sets the terminal state. Returns `false` (and changes nothing) if a disqualifying
    /// state was already recorded.
    pub fn disqualify(&mut self, indication: Indication, sub_indication: SubIndication) -> bool {
        if !self.is_passed() || indication == Indication::Passed {
            return false;
        }
        self.indication = indication;
        self.sub_indication = Some(sub_indication);
        true
    }

    /// Appends another conclusion's messages without touching the indication.
    pub fn absorb_messages(&mut self, other: &Conclusion) {
        self.errors.extend(other.errors.iter().cloned());
        self.warnings.extend(other.warnings.iter().cloned());
        self.infos.extend(other.infos.iter().cloned());
    }

    /// Copy with every message list sorted, for ordering-independent comparison.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.errors.sort();
        out.warnings.sort();
        out.infos.sort();
        out
    }
}
