use crate::check::{Check, EvidenceFault};
use adesval_types::{CheckDescriptor, Message, catalog};

pub struct FormatAccepted<'a> {
    pub format: &'a str,
    pub accepted: &'a [String],
}

impl Check for FormatAccepted<'_> {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::FC_FORMAT_ACCEPTED
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.accepted.is_empty()
            || self
                .accepted
                .iter()
                .any(|f| f.eq_ignore_ascii_case(self.format)))
    }

    fn failure_message(&self) -> Message {
        Message::new(self.descriptor().failure).arg(self.format)
    }
}

pub struct StructureValid {
    pub valid: bool,
}

impl Check for StructureValid {
    fn descriptor(&self) -> &'static CheckDescriptor {
        &catalog::FC_STRUCTURE_VALID
    }

    fn evaluate(&self) -> Result<bool, EvidenceFault> {
        Ok(self.valid)
    }
}
