//! Use case orchestration for declguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod input;
mod render;
mod report;
mod rules;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use input::{DeclarationEntry, DeclarationManifest, FileEntry, parse_manifest_json};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use rules::{RuleListing, format_rules, run_rules};
