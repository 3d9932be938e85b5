use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow commands.
///
/// Format: `::{level} file={path},line={line},col={col},title={check_id}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| {
            let level = match f.severity {
                RenderableSeverity::Error => "error",
                RenderableSeverity::Warning => "warning",
                RenderableSeverity::Info => "notice",
            };

            let mut props = Vec::new();
            if let Some(loc) = &f.location {
                props.push(format!("file={}", escape_property(&loc.path)));
                if let Some(line) = loc.line {
                    props.push(format!("line={}", line));
                }
                if let Some(col) = loc.col {
                    props.push(format!("col={}", col));
                }
            }
            props.push(format!("title={}", escape_property(&f.check_id)));

            format!("::{} {}::{}", level, props.join(","), escape_data(&f.message))
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally reserve `:` and `,`.
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
