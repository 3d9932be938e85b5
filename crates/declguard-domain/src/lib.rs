//! Pure declaration policy evaluation (no IO).
//!
//! Input: file paths plus the declaration nodes a host parser extracted from each file.
//! Output: per-declaration verdicts, or findings + verdict + summary data for a whole project.

#![forbid(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pattern;
pub mod policy;
pub mod report;
pub mod verdict;

mod checker;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checker::Checker;
pub use engine::{FileScope, PolicyEngine};
pub use error::{ConfigError, DeclarationError};
pub use verdict::{DiagnosticRecord, Verdict, Violation};
