//! The `check` use case: evaluate policy over a declaration manifest and produce a report.

use anyhow::Context;
use declguard_domain::Checker;
use declguard_domain::model::ProjectModel;
use declguard_settings::{Overrides, ResolvedConfig};
use declguard_types::{DeclguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::input::parse_manifest_json;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Declaration manifest produced by the host parser.
    pub manifest_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: DeclguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, build the checker, evaluate the manifest, produce
/// a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        declguard_settings::DeclguardConfigV1::default()
    } else {
        declguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = declguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let checker = Checker::new(&resolved.effective).context("build checker")?;

    let model = parse_manifest_json(input.manifest_text)?
        .into_model()
        .context("build project model")?;
    trace_file_scopes(&checker, &model);

    let declguard_domain::report::DomainReport {
        verdict,
        findings,
        data,
        counts,
    } = checker.evaluate(&model).context("evaluate declarations")?;

    tracing::info!(
        profile = %data.profile,
        files = data.files_scanned,
        declarations = data.declarations_scanned,
        findings = data.findings_total,
        errors = counts.error,
        warnings = counts.warning,
        verdict = ?verdict,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "declguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn trace_file_scopes(checker: &Checker, model: &ProjectModel) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let Some(engine) = checker.engine() else {
        tracing::debug!("rule disabled; no file is evaluated");
        return;
    };
    for file in &model.files {
        tracing::debug!(
            path = %file.path,
            declarations = file.declarations.len(),
            file_allowed = engine.file(&file.path).is_file_allowed(),
            "file scope"
        );
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declguard_types::ids;

    const MANIFEST: &str = r#"{
        "files": [
            { "path": "src/types.d.ts", "declarations": [
                { "kind": "interface", "name": "User", "exported": true, "line": 1, "col": 18 }
            ] },
            { "path": "src/button.tsx", "declarations": [
                { "kind": "interface", "name": "ButtonProps", "exported": true, "line": 2, "col": 18 },
                { "kind": "type-alias", "name": "Size", "exported": true, "line": 5, "col": 13 },
                { "kind": "type-alias", "name": "Local", "exported": false, "line": 6, "col": 6 }
            ] }
        ]
    }"#;

    fn check(config_text: &str, manifest_text: &str) -> anyhow::Result<CheckOutput> {
        run_check(CheckInput {
            config_text,
            manifest_text,
            overrides: Overrides::default(),
        })
    }

    #[test]
    fn empty_config_uses_recommended_defaults() {
        let output = check("", MANIFEST).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "recommended");

        let report = output.report;
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.files_scanned, 2);
        assert_eq!(report.data.declarations_scanned, 4);
        assert_eq!(report.findings.len(), 1);

        let f = &report.findings[0];
        assert_eq!(f.check_id, ids::CHECK_NO_EXPORTED_TYPES_OUTSIDE_DTS);
        assert_eq!(f.code, ids::CODE_NO_EXPORTED_TYPE);
        assert_eq!(
            f.message,
            "Exported type \"Size\" is not allowed outside files matching *.d.ts unless its name ends with an allowed suffix."
        );
        let loc = f.location.as_ref().expect("location");
        assert_eq!(loc.path.as_str(), "src/button.tsx");
        assert_eq!(loc.line, Some(5));
        assert_eq!(f.data["kind"], "type");
        assert_eq!(f.data["allowedPatterns"], "*.d.ts");
    }

    #[test]
    fn warn_profile_does_not_fail() {
        let output = check("profile = \"warn\"\nfail_on = \"error\"\n", MANIFEST).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(verdict_exit_code(output.report.verdict), 0);
    }

    #[test]
    fn rule_options_override_from_cli() {
        let overrides = Overrides {
            rule_options: Some(
                declguard_settings::parse_rule_options_json(
                    r#"[{"allowedFilePatterns": ["src/*"], "allowedTypeSuffixes": []}]"#,
                )
                .expect("options"),
            ),
            ..Overrides::default()
        };
        let output = run_check(CheckInput {
            config_text: "",
            manifest_text: MANIFEST,
            overrides,
        })
        .expect("run_check");

        // src/types.d.ts and src/button.tsx both match src/*
        assert!(output.report.findings.is_empty());
        assert_eq!(output.report.verdict, Verdict::Pass);
    }

    #[test]
    fn empty_pattern_list_is_a_configuration_error() {
        let cfg = "[rules.no-exported-types-outside-dts]\nallowedFilePatterns = []\n";
        let err = check(cfg, MANIFEST).expect_err("empty pattern list");
        assert!(format!("{err:#}").contains("at least one pattern"));
    }

    #[test]
    fn missing_name_fails_the_run() {
        let manifest = r#"{"files":[{"path":"a.ts","declarations":[{"kind":"interface","name":"","exported":true}]}]}"#;
        let err = check("", manifest).expect_err("missing name");
        assert!(format!("{err:#}").contains("build project model"));
    }

    #[test]
    fn off_profile_passes_everything() {
        let output = check("profile = \"off\"\n", MANIFEST).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.data.declarations_scanned, 4);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
