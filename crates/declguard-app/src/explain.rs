//! The `explain` use case: look up rule and message-key documentation.

use declguard_types::explain::{self, Explanation};
use declguard_types::{RuleMeta, lookup_rule, rules};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// The identifier resolved. `rule` is the registered rule it belongs to, whether the
    /// identifier named the rule itself or one of its message keys.
    Found {
        explanation: Explanation,
        rule: Option<&'static RuleMeta>,
    },
    /// Unknown identifier; includes available rule ids and message keys.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id (bare or qualified) or a message key.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found {
            explanation,
            rule: owning_rule(identifier),
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

fn owning_rule(identifier: &str) -> Option<&'static RuleMeta> {
    lookup_rule(identifier).or_else(|| {
        rules()
            .iter()
            .find(|r| r.messages.iter().any(|(key, _)| *key == identifier))
    })
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation, rule: Option<&RuleMeta>) -> String {
    let mut out = format!("{}\n{}\n\n", exp.title, "=".repeat(exp.title.len()));

    if let Some(rule) = rule {
        out.push_str(&format!(
            "Rule: {} ({})\n",
            rule.qualified_id,
            rule.rule_type.as_str()
        ));
        out.push_str(&format!("Docs: {}\n", rule.docs_url()));
        for (key, template) in rule.messages {
            out.push_str(&format!("Message {}: {}\n", key, template));
        }
        out.push('\n');
    }

    out.push_str(exp.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    for (label, code) in [
        ("Before (violation)", exp.examples.before),
        ("After (fixed)", exp.examples.after),
    ] {
        out.push_str(&format!("{}:\n```typescript\n{}\n```\n", label, code));
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&str], codes: &[&str]) -> String {
    let mut out = format!("Unknown rule id or message key: {}\n\n", identifier);

    out.push_str("Available rule ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable message keys:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}
