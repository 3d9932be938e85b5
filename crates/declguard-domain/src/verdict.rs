use crate::model::DeclarationKind;
use declguard_types::{ids, render_message, rules::NO_EXPORTED_TYPE_TEMPLATE};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Violation(Violation),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Allowed => None,
            Verdict::Violation(v) => Some(v),
        }
    }
}

/// An exported, non-exempt declaration in a non-exempt file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    kind: DeclarationKind,
    name: String,
    allowed_patterns: Vec<String>,
}

impl Violation {
    pub(crate) fn new(kind: DeclarationKind, name: &str, allowed_patterns: Vec<String>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            allowed_patterns,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusion patterns, in configuration order.
    pub fn allowed_patterns(&self) -> &[String] {
        &self.allowed_patterns
    }

    pub fn record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            message_key: ids::CODE_NO_EXPORTED_TYPE.to_string(),
            kind: self.kind.label().to_string(),
            name: self.name.clone(),
            allowed_patterns: self.allowed_patterns.join(", "),
        }
    }
}

/// What the reporting side receives for each violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub message_key: String,
    pub kind: String,
    pub name: String,
    pub allowed_patterns: String,
}

impl DiagnosticRecord {
    pub fn message(&self) -> String {
        render_message(
            NO_EXPORTED_TYPE_TEMPLATE,
            &[
                ("kind", self.kind.as_str()),
                ("name", self.name.as_str()),
                ("allowedPatterns", self.allowed_patterns.as_str()),
            ],
        )
    }
}
