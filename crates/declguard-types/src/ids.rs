//! Stable identifiers for rules and message keys.
//!
//! `check_id` is the plugin-qualified rule id. `code` is the rule's message key.

pub const PLUGIN_NAME: &str = "declguard";

// Rules
pub const RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS: &str = "no-exported-types-outside-dts";
pub const CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS: &str = "declguard/no-exported-types-outside-dts";

// Message keys: no-exported-types-outside-dts
pub const CODE_NO_EXPORTED_TYPE: &str = "noExportedType";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Strip the `declguard/` prefix from a qualified rule id, if present.
pub fn bare_rule_id(id: &str) -> &str {
    id.strip_prefix(PLUGIN_NAME)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(id)
}
