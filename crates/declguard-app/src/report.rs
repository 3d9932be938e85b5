use anyhow::Context;
use declguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use declguard_types::{
    DeclguardData, DeclguardReport, Finding, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<DeclguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse declguard report")
}

pub fn serialize_report(report: &DeclguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &DeclguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            files_scanned: report.data.files_scanned,
            declarations_scanned: report.data.declarations_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
            col: loc.col,
        }),
        declaration: declaration_label(&f.data),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// `kind name` from a policy finding's data payload.
fn declaration_label(data: &serde_json::Value) -> Option<String> {
    let kind = data.get("kind")?.as_str()?;
    let name = data.get("name")?.as_str()?;
    Some(format!("{kind} {name}"))
}

fn envelope(verdict: Verdict, findings: Vec<Finding>, data: DeclguardData) -> DeclguardReport {
    let now = OffsetDateTime::now_utc();
    DeclguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "declguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict,
        findings,
        data,
    }
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> DeclguardReport {
    envelope(
        Verdict::Fail,
        vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run declguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        DeclguardData {
            profile: "unknown".to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..DeclguardData::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_report_parses_back() {
        let report = runtime_error_report("boom");
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.findings.len(), 1);
        assert_eq!(parsed.findings[0].check_id, "tool.runtime");
        assert_eq!(parsed.verdict, Verdict::Fail);
        assert_eq!(parsed.data.profile, "unknown");
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema":"lintkit.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn renderable_keeps_location_and_counts() {
        let mut report = runtime_error_report("boom");
        report.findings[0].location = Some(declguard_types::Location {
            path: declguard_types::SourcePath::new("src/a.ts"),
            line: Some(2),
            col: Some(13),
        });
        report.data.files_scanned = 3;

        let r = to_renderable(&report);
        assert_eq!(r.verdict, RenderableVerdictStatus::Fail);
        assert_eq!(r.data.files_scanned, 3);
        let loc = r.findings[0].location.as_ref().expect("location");
        assert_eq!(loc.path, "src/a.ts");
        assert_eq!(loc.col, Some(13));
        assert_eq!(r.findings[0].severity, RenderableSeverity::Error);
    }

    #[test]
    fn renderable_labels_policy_declarations() {
        let mut report = runtime_error_report("boom");
        assert_eq!(to_renderable(&report).findings[0].declaration, None);

        report.findings[0].data = serde_json::json!({"kind": "interface", "name": "User"});
        assert_eq!(
            to_renderable(&report).findings[0].declaration.as_deref(),
            Some("interface User")
        );
    }
}
