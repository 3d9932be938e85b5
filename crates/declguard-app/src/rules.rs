//! The `rules` use case: list registered rules and how a profile configures them.

use declguard_types::{RuleMeta, Severity, rules};

#[derive(Clone, Debug)]
pub struct RuleListing {
    pub meta: &'static RuleMeta,
    pub enabled: bool,
    pub severity: Severity,
    pub allowed_file_patterns: Vec<String>,
    pub allowed_type_suffixes: Vec<String>,
}

/// Describe every registered rule as the named preset configures it.
pub fn run_rules(profile: &str) -> Vec<RuleListing> {
    let effective = declguard_settings::preset(profile);
    rules()
        .iter()
        .map(|meta| match effective.rules.get(meta.id) {
            Some(policy) => RuleListing {
                meta,
                enabled: policy.enabled,
                severity: policy.severity,
                allowed_file_patterns: policy.options.allowed_file_patterns.clone(),
                allowed_type_suffixes: policy.options.allowed_type_suffixes.clone(),
            },
            None => RuleListing {
                meta,
                enabled: false,
                severity: Severity::Error,
                allowed_file_patterns: Vec::new(),
                allowed_type_suffixes: Vec::new(),
            },
        })
        .collect()
}

pub fn format_rules(listings: &[RuleListing]) -> String {
    let mut out = String::new();
    for l in listings {
        let state = if l.enabled {
            match l.severity {
                Severity::Info => "info",
                Severity::Warning => "warning",
                Severity::Error => "error",
            }
        } else {
            "off"
        };
        out.push_str(&format!(
            "{} [{}] ({})\n  {}\n  docs: {}\n",
            l.meta.qualified_id,
            state,
            l.meta.rule_type.as_str(),
            l.meta.description,
            l.meta.docs_url()
        ));
        out.push_str(&format!(
            "  allowedFilePatterns: {:?}\n  allowedTypeSuffixes: {:?}\n",
            l.allowed_file_patterns, l.allowed_type_suffixes
        ));
        for (key, template) in l.meta.messages {
            out.push_str(&format!("  message {}: {}\n", key, template));
        }
    }
    out
}
