use declguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use declguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Known profile names, default first.
pub const PROFILES: &[&str] = &["recommended", "warn", "off"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        "off" => off_profile(),
        // default
        _ => recommended_profile(),
    }
}

fn recommended_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "recommended".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        rules: default_rules(RulePolicy::enabled(Severity::Error)),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        rules: default_rules(RulePolicy::enabled(Severity::Warning)),
    }
}

fn off_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "off".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        rules: default_rules(RulePolicy::disabled()),
    }
}

fn default_rules(policy: RulePolicy) -> BTreeMap<String, RulePolicy> {
    let mut m = BTreeMap::new();
    m.insert(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS.to_string(), policy);
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_enables_rule_at_error() {
        let cfg = preset("recommended");
        let policy = cfg
            .rule_policy(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS)
            .expect("enabled");
        assert_eq!(policy.severity, Severity::Error);
        assert_eq!(policy.options.allowed_file_patterns, vec!["*.d.ts"]);
        assert_eq!(policy.options.allowed_type_suffixes, vec!["Props"]);
    }

    #[test]
    fn unknown_profile_falls_back_to_recommended() {
        assert_eq!(preset("nope").profile, "recommended");
    }

    #[test]
    fn off_disables_rule() {
        assert!(
            preset("off")
                .rule_policy(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS)
                .is_none()
        );
    }

    #[test]
    fn every_listed_profile_resolves_to_itself() {
        for name in PROFILES {
            assert_eq!(preset(name).profile, *name);
        }
    }
}
