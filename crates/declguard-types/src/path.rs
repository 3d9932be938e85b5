use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source file path as used in findings and pattern matching.
///
/// The only normalization is separator conversion: `\` becomes `/`. Everything else,
/// including a leading `./` or an empty path, is kept so that patterns see exactly
/// what the host reported.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment (the file name).
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
