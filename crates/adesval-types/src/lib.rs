//! Stable DTOs and IDs used across the adesval workspace.
//!
//! This crate is intentionally boring:
//! - the outcome taxonomy (indication, sub-indication, conclusion)
//! - the flat symbolic message table and its default English text
//! - stable check IDs and the check catalog
//! - the hierarchical block report and the report envelope

#![forbid(unsafe_code)]

pub mod block;
pub mod catalog;
pub mod conclusion;
pub mod explain;
pub mod ids;
pub mod indication;
pub mod message;
pub mod qualification;
pub mod report;
pub mod text;

pub use block::{BlockId, BlockOutcome, BlockReport, ConstraintRecord, ConstraintStatus};
pub use catalog::CheckDescriptor;
pub use conclusion::Conclusion;
pub use explain::{Explanation, lookup_explanation};
pub use indication::{ConstraintLevel, Indication, SubIndication};
pub use message::{MESSAGE_TABLE_VERSION, Message, MessageTag, UnknownMessageTag};
pub use qualification::{CertificateQualification, SignatureQualification};
pub use report::{
    SCHEMA_REPORT_V1, SignatureReport, ToolMeta, ValidationReport, ValidationSummary,
};
