//! Stable DTOs and IDs used across the declguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and message keys
//! - canonical source path handling
//! - rule metadata and message templates
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod rules;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::SourcePath;
pub use receipt::{
    DeclguardData, DeclguardReport, Finding, Location, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, Verdict,
};
pub use rules::{RuleMeta, RuleType, lookup_rule, render_message, rules};
