use crate::model::DeclarationKind;
use thiserror::Error;

/// Invalid rule options. Raised once, when the engine is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("allowedFilePatterns must contain at least one pattern")]
    EmptyPatternList,

    #[error("invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A declaration node handed over by the host breaks the traversal contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("{kind} declaration has no identifier name")]
    MissingName { kind: DeclarationKind },
}
