use crate::{model::DeclguardConfigV1, model::RuleOptionsConfig, presets};
use anyhow::Context;
use declguard_domain::PolicyEngine;
use declguard_domain::policy::{EffectiveConfig, FailOn, RuleOptions, RulePolicy};
use declguard_types::{Severity, ids, lookup_rule};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    /// Lint-style options for `no-exported-types-outside-dts`, applied after the config file.
    pub rule_options: Option<RuleOptionsConfig>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: DeclguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "recommended".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let Some(meta) = lookup_rule(rule_id) else {
            anyhow::bail!("unknown rule: {rule_id}");
        };
        let entry = effective
            .rules
            .entry(meta.id.to_string())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
        apply_options(&mut entry.options, rc.options());
    }

    if let Some(options) = overrides.rule_options {
        let entry = effective
            .rules
            .entry(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS.to_string())
            .or_insert_with(RulePolicy::disabled);
        apply_options(&mut entry.options, options);
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    validate_rule_options(&effective)?;

    Ok(ResolvedConfig { effective })
}

/// Only fields that were given replace the defaults; an explicit empty list is kept as-is.
fn apply_options(target: &mut RuleOptions, options: RuleOptionsConfig) {
    if let Some(patterns) = options.allowed_file_patterns {
        target.allowed_file_patterns = patterns;
    }
    if let Some(suffixes) = options.allowed_type_suffixes {
        target.allowed_type_suffixes = suffixes;
    }
}

fn validate_rule_options(effective: &EffectiveConfig) -> anyhow::Result<()> {
    for (rule_id, policy) in effective.rules.iter().filter(|(_, p)| p.enabled) {
        PolicyEngine::new(&policy.options)
            .with_context(|| format!("invalid options for {rule_id}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
