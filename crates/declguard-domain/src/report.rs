use crate::policy::FailOn;
use declguard_types::{DeclguardData, Finding, Severity, Verdict};

/// Tally of emitted findings per severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    fn bump(mut self, severity: Severity) -> Self {
        *match severity {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
        } += 1;
        self
    }

    /// Errors always fail; warnings fail only under `fail_on = warning`.
    pub fn verdict(&self, fail_on: FailOn) -> Verdict {
        match (self.error, self.warning, fail_on) {
            (1.., _, _) => Verdict::Fail,
            (0, 1.., FailOn::Warning) => Verdict::Fail,
            (0, 1.., FailOn::Error) => Verdict::Warn,
            (0, 0, _) => Verdict::Pass,
        }
    }
}

impl<'a> FromIterator<&'a Finding> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = &'a Finding>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |acc, f| acc.bump(f.severity))
    }
}

/// Outcome of one evaluation, before it is wrapped in a report envelope.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: DeclguardData,
    pub counts: SeverityCounts,
}
