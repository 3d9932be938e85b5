use crate::error::DeclarationError;
use declguard_types::SourcePath;
use std::fmt;

/// Syntactic kind of a type-like declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum DeclarationKind {
    Interface,
    TypeAlias,
}

impl DeclarationKind {
    /// Stable identifier (`interface`, `type-alias`).
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Interface => "interface",
            DeclarationKind::TypeAlias => "type-alias",
        }
    }

    /// Word used in diagnostic messages (`interface`, `type`).
    pub fn label(self) -> &'static str {
        match self {
            DeclarationKind::Interface => "interface",
            DeclarationKind::TypeAlias => "type",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "interface" => Some(DeclarationKind::Interface),
            "type-alias" | "type" => Some(DeclarationKind::TypeAlias),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declaration as seen at visit time. Only kind, name, and export status matter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationRecord {
    kind: DeclarationKind,
    name: String,
    is_exported: bool,
}

impl DeclarationRecord {
    /// Fails fast when the host hands over a node without an identifier.
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
        is_exported: bool,
    ) -> Result<Self, DeclarationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeclarationError::MissingName { kind });
        }
        Ok(Self {
            kind,
            name,
            is_exported,
        })
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_exported(&self) -> bool {
        self.is_exported
    }
}

/// All source files in scope for one run.
#[derive(Clone, Debug, Default)]
pub struct ProjectModel {
    pub files: Vec<SourceFileModel>,
}

#[derive(Clone, Debug, Default)]
pub struct SourceFileModel {
    pub path: SourcePath,
    pub declarations: Vec<DeclarationNode>,
}

/// Raw declaration node as extracted by the host, before validation.
#[derive(Clone, Debug)]
pub struct DeclarationNode {
    pub kind: DeclarationKind,
    pub name: String,
    pub exported: bool,
    /// 1-based position of the identifier, when the host knows it.
    pub line: Option<u32>,
    pub col: Option<u32>,
}

impl ProjectModel {
    pub fn declaration_count(&self) -> usize {
        self.files.iter().map(|f| f.declarations.len()).sum()
    }
}
