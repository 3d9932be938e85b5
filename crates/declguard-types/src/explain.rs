//! Explain registry for rules and message keys.
//!
//! Maps rule IDs and message keys to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or message key.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/message.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after code examples.
    pub examples: ExamplePair,
}

/// Before and after code examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Code that would trigger a finding.
    pub before: &'static str,
    /// Code that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id (bare or qualified) or message key.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match ids::bare_rule_id(identifier) {
        ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS => Some(explain_no_exported_types_outside_dts()),
        ids::CODE_NO_EXPORTED_TYPE => Some(explain_no_exported_type()),
        _ => None,
    }
}

/// List all known rule IDs (qualified).
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS]
}

/// List all known message keys.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_NO_EXPORTED_TYPE]
}

fn explain_no_exported_types_outside_dts() -> Explanation {
    Explanation {
        title: "No Exported Types Outside Declaration Files",
        description: "\
Detects exported interfaces and type aliases that live outside the files allowed to hold
shared type declarations (by default `*.d.ts`).

Keeping exported types in dedicated declaration files:
- gives every shared type a single, predictable home
- keeps implementation modules free of type-only exports
- avoids accidental runtime coupling between modules that only need a type

Two allowances exempt a declaration:
- the file path matches `allowedFilePatterns` (default `[\"*.d.ts\"]`); a leading `!` excludes
- the declaration name ends with one of `allowedTypeSuffixes` (default `[\"Props\"]`)

Declarations that are not exported are never reported.",
        remediation: "\
Move the exported type into a file matching one of the allowed patterns, for example
`src/types/user.d.ts`, and import it from there.

If the type describes component props, rename it so it ends with an allowed suffix such as
`Props`.

To allow more locations, extend `allowedFilePatterns` in declguard.toml:

    [rules.no-exported-types-outside-dts]
    allowedFilePatterns = [\"*.d.ts\", \"src/types/*\"]",
        examples: ExamplePair {
            before: r#"// src/user.ts
export type UserId = string;
export interface User { id: UserId }"#,
            after: r#"// src/types/user.d.ts
export type UserId = string;
export interface User { id: UserId }

// src/user.ts
import type { User } from "./types/user";"#,
        },
    }
}

fn explain_no_exported_type() -> Explanation {
    Explanation {
        title: "Exported Type Outside Allowed Files",
        description: "\
An exported interface or type alias was found in a file that does not match any allowed file
pattern, and its name does not end with an allowed suffix.

The finding data carries `kind`, `name`, and `allowedPatterns` (the positive patterns, joined
by \", \").",
        remediation: "\
Either move the declaration into a file matching `allowedPatterns`, rename it to carry an
allowed suffix, or stop exporting it if it is only used locally.",
        examples: ExamplePair {
            before: r#"// src/button.tsx
export interface ButtonOptions { label: string }"#,
            after: r#"// src/button.tsx
export interface ButtonProps { label: string }"#,
        },
    }
}
