//! Rule metadata registry.
//!
//! Each rule carries a lint-style meta block: its kind, a one-line description, and a map of
//! message keys to `{{ placeholder }}` templates.

use crate::ids;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleType {
    Problem,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::Problem => "problem",
        }
    }
}

/// Rule documentation lives at `<base><bare rule id>`.
pub const DOCS_BASE_URL: &str = "https://declguard.dev/eslint/rules/";

#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    /// Bare rule id (`no-exported-types-outside-dts`).
    pub id: &'static str,
    /// Plugin-qualified id used as `check_id` in findings.
    pub qualified_id: &'static str,
    pub rule_type: RuleType,
    pub description: &'static str,
    /// `(message key, template)` pairs.
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleMeta {
    pub fn message(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }

    pub fn docs_url(&self) -> String {
        format!("{DOCS_BASE_URL}{}", self.id)
    }
}

pub const NO_EXPORTED_TYPE_TEMPLATE: &str = "Exported {{ kind }} \"{{ name }}\" is not allowed outside files matching {{ allowedPatterns }} unless its name ends with an allowed suffix.";

static RULES: &[RuleMeta] = &[RuleMeta {
    id: ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS,
    qualified_id: ids::CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS,
    rule_type: RuleType::Problem,
    description: "Disallow exported types/interfaces outside allowed files unless their name has an allowed suffix",
    messages: &[(ids::CODE_NO_EXPORTED_TYPE, NO_EXPORTED_TYPE_TEMPLATE)],
}];

/// All registered rules, in registration order.
pub fn rules() -> &'static [RuleMeta] {
    RULES
}

/// Look up a rule by bare or plugin-qualified id.
pub fn lookup_rule(id: &str) -> Option<&'static RuleMeta> {
    let bare = ids::bare_rule_id(id);
    RULES.iter().find(|r| r.id == bare)
}

/// Interpolate `{{ key }}` placeholders. Unknown placeholders are left verbatim.
pub fn render_message(template: &str, data: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = after_open[..end].trim();
        match data.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
