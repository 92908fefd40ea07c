//! Pure signature validation (no IO).
//!
//! Input: an evidence model and a resolved policy constructed elsewhere.
//! Output: one report tree per signature.

#![forbid(unsafe_code)]

pub mod chain;
pub mod check;
pub mod checks;
pub mod composer;
pub mod model;
pub mod policy;
pub mod process;

mod engine;

pub use engine::{validate, validate_signature};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod proptest;
