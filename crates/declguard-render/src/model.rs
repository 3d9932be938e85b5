use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderableSeverity {
    Error,
    Warning,
    Info,
}

impl RenderableSeverity {
    pub fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Error => "ERROR",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Info => "INFO",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    /// `interface User`, `type UserId`; absent for tool findings.
    pub declaration: Option<String>,
    pub help: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub files_scanned: u32,
    pub declarations_scanned: u32,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

impl RenderableReport {
    /// Findings keyed by file path; findings without a location come last under `None`.
    /// Order within a file is the report order.
    pub fn findings_by_file(&self) -> Vec<(Option<&str>, Vec<&RenderableFinding>)> {
        let mut by_path: BTreeMap<&str, Vec<&RenderableFinding>> = BTreeMap::new();
        let mut unlocated = Vec::new();
        for f in &self.findings {
            match &f.location {
                Some(loc) => by_path.entry(loc.path.as_str()).or_default().push(f),
                None => unlocated.push(f),
            }
        }

        let mut out: Vec<_> = by_path
            .into_iter()
            .map(|(path, findings)| (Some(path), findings))
            .collect();
        if !unlocated.is_empty() {
            out.push((None, unlocated));
        }
        out
    }
}
