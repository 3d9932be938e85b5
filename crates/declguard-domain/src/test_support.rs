use crate::model::{DeclarationKind, DeclarationNode, DeclarationRecord, ProjectModel, SourceFileModel};
use crate::policy::{EffectiveConfig, FailOn, RuleOptions, RulePolicy};
use declguard_types::{Severity, SourcePath, ids};
use std::collections::BTreeMap;

pub fn record(kind: DeclarationKind, name: &str, exported: bool) -> DeclarationRecord {
    DeclarationRecord::new(kind, name, exported).expect("test declarations are named")
}

pub fn options(patterns: &[&str], suffixes: &[&str]) -> RuleOptions {
    RuleOptions {
        allowed_file_patterns: patterns.iter().map(|s| s.to_string()).collect(),
        allowed_type_suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn node(kind: DeclarationKind, name: &str, exported: bool, line: u32) -> DeclarationNode {
    DeclarationNode {
        kind,
        name: name.to_string(),
        exported,
        line: Some(line),
        col: Some(1),
    }
}

pub fn file(path: &str, declarations: Vec<DeclarationNode>) -> SourceFileModel {
    SourceFileModel {
        path: SourcePath::new(path),
        declarations,
    }
}

pub fn project(files: Vec<SourceFileModel>) -> ProjectModel {
    ProjectModel { files }
}

pub fn config_with_rule(severity: Severity, options: RuleOptions) -> EffectiveConfig {
    let mut policy = RulePolicy::enabled(severity);
    policy.options = options;

    let mut rules = BTreeMap::new();
    rules.insert(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS.to_string(), policy);

    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        rules,
    }
}
