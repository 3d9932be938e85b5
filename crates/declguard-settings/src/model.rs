use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `declguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeclguardConfigV1 {
    /// Optional schema string for tooling (`declguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `recommended` (default), `warn`, or `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Map of rule id (bare or `declguard/`-qualified) -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    /// Path patterns whose files may export types. Defaults to `["*.d.ts"]`.
    #[serde(
        default,
        rename = "allowedFilePatterns",
        alias = "allowed_file_patterns",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_file_patterns: Option<Vec<String>>,

    /// Name suffixes that exempt a declaration. Defaults to `["Props"]`.
    #[serde(
        default,
        rename = "allowedTypeSuffixes",
        alias = "allowed_type_suffixes",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_type_suffixes: Option<Vec<String>>,
}

impl RuleConfig {
    pub fn options(&self) -> RuleOptionsConfig {
        RuleOptionsConfig {
            allowed_file_patterns: self.allowed_file_patterns.clone(),
            allowed_type_suffixes: self.allowed_type_suffixes.clone(),
        }
    }
}

/// Lint-style options object for `no-exported-types-outside-dts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_file_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_type_suffixes: Option<Vec<String>>,
}
