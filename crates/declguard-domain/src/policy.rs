use declguard_types::Severity;
use std::collections::BTreeMap;

pub const DEFAULT_ALLOWED_FILE_PATTERNS: &[&str] = &["*.d.ts"];
pub const DEFAULT_ALLOWED_TYPE_SUFFIXES: &[&str] = &["Props"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

/// Options of `no-exported-types-outside-dts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleOptions {
    pub allowed_file_patterns: Vec<String>,
    pub allowed_type_suffixes: Vec<String>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            allowed_file_patterns: to_owned(DEFAULT_ALLOWED_FILE_PATTERNS),
            allowed_type_suffixes: to_owned(DEFAULT_ALLOWED_TYPE_SUFFIXES),
        }
    }
}

fn to_owned(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[derive(Clone, Debug)]
pub struct RulePolicy {
    pub enabled: bool,
    pub severity: Severity,
    pub options: RuleOptions,
}

impl RulePolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
            options: RuleOptions::default(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
            options: RuleOptions::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    /// Keyed by bare rule id.
    pub rules: BTreeMap<String, RulePolicy>,
}

impl EffectiveConfig {
    pub fn rule_policy(&self, rule_id: &str) -> Option<&RulePolicy> {
        self.rules.get(rule_id).filter(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_dts_and_props() {
        let o = RuleOptions::default();
        assert_eq!(o.allowed_file_patterns, vec!["*.d.ts".to_string()]);
        assert_eq!(o.allowed_type_suffixes, vec!["Props".to_string()]);
    }

    #[test]
    fn disabled_rules_are_hidden() {
        let mut rules = BTreeMap::new();
        rules.insert("a".to_string(), RulePolicy::enabled(Severity::Error));
        rules.insert("b".to_string(), RulePolicy::disabled());
        let cfg = EffectiveConfig {
            profile: "test".to_string(),
            fail_on: FailOn::Error,
            max_findings: 10,
            rules,
        };
        assert!(cfg.rule_policy("a").is_some());
        assert!(cfg.rule_policy("b").is_none());
        assert!(cfg.rule_policy("c").is_none());
    }
}
