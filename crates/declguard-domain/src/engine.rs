use crate::classifier::is_suffix_exempt;
use crate::error::ConfigError;
use crate::model::DeclarationRecord;
use crate::pattern::PatternSet;
use crate::policy::RuleOptions;
use crate::verdict::{Verdict, Violation};
use declguard_types::SourcePath;

/// Combines the file-pattern allowance and the name-suffix allowance.
///
/// Holds only immutable compiled configuration, so one engine can serve any number of files
/// and threads.
#[derive(Clone, Debug)]
pub struct PolicyEngine {
    patterns: PatternSet,
    suffixes: Vec<String>,
}

impl PolicyEngine {
    pub fn new(options: &RuleOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            patterns: PatternSet::compile(&options.allowed_file_patterns)?,
            suffixes: options.allowed_type_suffixes.clone(),
        })
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Resolve the file-level allowance once; the scope is then shared by every declaration
    /// of that file.
    pub fn file(&self, path: &SourcePath) -> FileScope<'_> {
        FileScope {
            engine: self,
            file_allowed: self.patterns.is_file_allowed(path),
        }
    }

    pub fn evaluate(&self, declaration: &DeclarationRecord, path: &SourcePath) -> Verdict {
        self.file(path).evaluate(declaration)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FileScope<'e> {
    engine: &'e PolicyEngine,
    file_allowed: bool,
}

impl FileScope<'_> {
    pub fn is_file_allowed(&self) -> bool {
        self.file_allowed
    }

    pub fn evaluate(&self, declaration: &DeclarationRecord) -> Verdict {
        if !declaration.is_exported() {
            return Verdict::Allowed;
        }
        if self.file_allowed {
            return Verdict::Allowed;
        }
        if is_suffix_exempt(declaration.name(), &self.engine.suffixes) {
            return Verdict::Allowed;
        }
        Verdict::Violation(Violation::new(
            declaration.kind(),
            declaration.name(),
            self.engine.patterns.positive_texts(),
        ))
    }
}
