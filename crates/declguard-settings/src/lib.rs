//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DeclguardConfigV1, RuleConfig, RuleOptionsConfig};
pub use presets::{PROFILES, preset};
pub use resolve::{Overrides, ResolvedConfig};

use anyhow::Context;

/// Parse `declguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DeclguardConfigV1> {
    let cfg: DeclguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse lint-style rule options: either the options object itself or a one-element array
/// wrapping it (`[{"allowedFilePatterns": [...]}]`).
pub fn parse_rule_options_json(input: &str) -> anyhow::Result<RuleOptionsConfig> {
    let value: serde_json::Value = serde_json::from_str(input).context("parse rule options json")?;
    let value = match value {
        serde_json::Value::Array(mut items) => match items.len() {
            0 => return Ok(RuleOptionsConfig::default()),
            1 => items.remove(0),
            n => anyhow::bail!("expected at most one rule options object, found {n}"),
        },
        other => other,
    };
    serde_json::from_value(value).context("invalid rule options")
}

/// Resolve the effective config used by the engine (profile + overrides + per-rule config).
pub fn resolve_config(
    cfg: DeclguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
