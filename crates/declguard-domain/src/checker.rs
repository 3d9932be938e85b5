use crate::engine::{FileScope, PolicyEngine};
use crate::error::{ConfigError, DeclarationError};
use crate::fingerprint::fingerprint_for_declaration;
use crate::handlers::handler_for;
use crate::model::{DeclarationNode, ProjectModel, SourceFileModel};
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::verdict::{Verdict, Violation};
use declguard_types::{DeclguardData, Finding, Location, Severity, ids, lookup_rule};
use rayon::prelude::*;
use serde_json::json;

/// Compiled form of an [`EffectiveConfig`], ready to evaluate whole projects.
///
/// Building it is the one place configuration errors surface; evaluation itself only fails
/// when the host hands over a declaration without a name.
#[derive(Clone, Debug)]
pub struct Checker {
    profile: String,
    fail_on: FailOn,
    max_findings: usize,
    rule: Option<ActiveRule>,
}

#[derive(Clone, Debug)]
struct ActiveRule {
    engine: PolicyEngine,
    severity: Severity,
    docs_url: Option<String>,
}

impl Checker {
    pub fn new(cfg: &EffectiveConfig) -> Result<Self, ConfigError> {
        let rule = match cfg.rule_policy(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS) {
            Some(policy) => Some(ActiveRule {
                engine: PolicyEngine::new(&policy.options)?,
                severity: policy.severity,
                docs_url: lookup_rule(ids::RULE_NO_EXPORTED_TYPES_OUTSIDE_DTS)
                    .map(|meta| meta.docs_url()),
            }),
            None => None,
        };

        Ok(Self {
            profile: cfg.profile.clone(),
            fail_on: cfg.fail_on,
            max_findings: cfg.max_findings,
            rule,
        })
    }

    /// The engine of the enabled rule, if any.
    pub fn engine(&self) -> Option<&PolicyEngine> {
        self.rule.as_ref().map(|r| &r.engine)
    }

    pub fn evaluate(&self, model: &ProjectModel) -> Result<DomainReport, DeclarationError> {
        let mut findings: Vec<Finding> = match &self.rule {
            Some(rule) => model
                .files
                .par_iter()
                .map(|file| rule.check_file(file))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .flatten()
                .collect(),
            None => Vec::new(),
        };

        // Deterministic ordering before truncation.
        findings.sort_by(compare_findings);

        let total = findings.len() as u32;

        let mut emitted = findings;
        let mut truncated_reason: Option<String> = None;
        if emitted.len() > self.max_findings {
            emitted.truncate(self.max_findings);
            truncated_reason = Some(format!(
                "findings truncated to max_findings={}",
                self.max_findings
            ));
        }

        let counts: SeverityCounts = emitted.iter().collect();
        let verdict = counts.verdict(self.fail_on);

        let data = DeclguardData {
            profile: self.profile.clone(),
            files_scanned: model.files.len() as u32,
            declarations_scanned: model.declaration_count() as u32,
            findings_total: total,
            findings_emitted: emitted.len() as u32,
            truncated_reason,
        };

        Ok(DomainReport {
            verdict,
            findings: emitted,
            data,
            counts,
        })
    }
}

impl ActiveRule {
    fn check_file(&self, file: &SourceFileModel) -> Result<Vec<Finding>, DeclarationError> {
        let scope = self.engine.file(&file.path);
        let mut out = Vec::new();
        for node in &file.declarations {
            if let Verdict::Violation(v) = visit(&scope, node)? {
                out.push(self.finding(file, node, &v));
            }
        }
        Ok(out)
    }

    fn finding(&self, file: &SourceFileModel, node: &DeclarationNode, v: &Violation) -> Finding {
        let record = v.record();
        let fingerprint = fingerprint_for_declaration(
            ids::CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS,
            ids::CODE_NO_EXPORTED_TYPE,
            file.path.as_str(),
            v.kind().as_str(),
            v.name(),
        );

        let mut help = format!(
            "Move `{}` into a file matching {}",
            v.name(),
            record.allowed_patterns
        );
        let suffixes = self.engine.suffixes();
        if !suffixes.is_empty() {
            help.push_str(&format!(
                ", or rename it to end with one of: {}",
                suffixes.join(", ")
            ));
        }
        help.push('.');

        Finding {
            severity: self.severity,
            check_id: ids::CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS.to_string(),
            code: ids::CODE_NO_EXPORTED_TYPE.to_string(),
            message: record.message(),
            location: Some(Location {
                path: file.path.clone(),
                line: node.line,
                col: node.col,
            }),
            help: Some(help),
            url: self.docs_url.clone(),
            fingerprint: Some(fingerprint),
            data: json!({
                "messageKey": record.message_key,
                "kind": record.kind,
                "name": record.name,
                "allowedPatterns": record.allowed_patterns,
            }),
        }
    }
}

fn visit(scope: &FileScope<'_>, node: &DeclarationNode) -> Result<Verdict, DeclarationError> {
    handler_for(node.kind)(scope, &node.name, node.exported)
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line, then location.col (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let position = |f: &Finding| match &f.location {
        Some(l) => (
            l.path.as_str().to_string(),
            l.line.unwrap_or(u32::MAX),
            l.col.unwrap_or(u32::MAX),
        ),
        None => ("~".to_string(), u32::MAX, u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| position(a).cmp(&position(b)))
        .then_with(|| a.check_id.cmp(&b.check_id))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.message.cmp(&b.message))
}
