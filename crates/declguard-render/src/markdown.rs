use crate::{RenderableFinding, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let d = &report.data;

    let mut out = format!(
        "# Declguard report\n\n- Verdict: **{}**\n- Scanned: {} file(s), {} declaration(s)\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict, d.files_scanned, d.declarations_scanned, d.findings_emitted, d.findings_total
    );

    if let Some(r) = &d.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n");
    for (path, findings) in report.findings_by_file() {
        match path {
            Some(p) => out.push_str(&format!("\n### `{}`\n\n", p)),
            None => out.push_str("\n### Tool\n\n"),
        }
        for f in findings {
            push_finding(&mut out, f);
        }
    }

    out
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    out.push_str(&format!("- [{}]", f.severity.label()));
    if let Some(loc) = &f.location {
        match (loc.line, loc.col) {
            (Some(line), Some(col)) => out.push_str(&format!(" L{}:{}", line, col)),
            (Some(line), None) => out.push_str(&format!(" L{}", line)),
            _ => {}
        }
    }
    if let Some(decl) = &f.declaration {
        out.push_str(&format!(" `{}`", decl));
    }
    out.push_str(&format!(": {} (`{}`)\n", f.message, f.code));

    if let Some(help) = &f.help {
        out.push_str(&format!("  - help: {}\n", help));
    }
    if let Some(url) = &f.url {
        out.push_str(&format!("  - docs: {}\n", url));
    }
}
