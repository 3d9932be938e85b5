//! File pattern matching.
//!
//! The dialect is deliberately flat:
//! - `*` matches any run of characters, `/` included (`**` is the same as `*`)
//! - `?` matches exactly one character
//! - everything else is literal, and the whole subject must match
//! - a leading `!` turns the pattern into an exclusion
//!
//! A pattern without `/` is tried against the full path and against the file name, so
//! `*.d.ts` matches at any depth.

use crate::error::ConfigError;
use declguard_types::SourcePath;
use globset::{GlobBuilder, GlobMatcher};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Include,
    Exclude,
}

/// A compiled pattern. Built once per configuration and reused for every file.
#[derive(Clone, Debug)]
pub struct FilePattern {
    raw: String,
    polarity: Polarity,
    has_separator: bool,
    /// `None` when the pattern text is empty (a bare `!`): it matches nothing.
    matcher: Option<GlobMatcher>,
}

impl FilePattern {
    pub fn compile(raw: &str) -> Result<Self, ConfigError> {
        let (polarity, text) = match raw.strip_prefix('!') {
            Some(rest) => (Polarity::Exclude, rest),
            None => (Polarity::Include, raw),
        };

        let matcher = if text.is_empty() {
            None
        } else {
            let glob = GlobBuilder::new(&to_flat_glob(text))
                .literal_separator(false)
                .backslash_escape(false)
                .build()
                .map_err(|source| ConfigError::InvalidPattern {
                    pattern: raw.to_string(),
                    source,
                })?;
            Some(glob.compile_matcher())
        };

        Ok(Self {
            raw: raw.to_string(),
            polarity,
            has_separator: text.contains('/'),
            matcher,
        })
    }

    /// Pattern exactly as configured, `!` included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Patterns with a `/` only ever match the full path.
    pub fn has_separator(&self) -> bool {
        self.has_separator
    }

    pub fn matches(&self, path: &SourcePath) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };
        matcher.is_match(path.as_str()) || (!self.has_separator && matcher.is_match(path.basename()))
    }
}

/// Rewrite the flat dialect into globset syntax: collapse `*` runs and bracket the characters
/// globset would otherwise treat as classes or alternations.
fn to_flat_glob(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev_star = false;
    for c in text.chars() {
        match c {
            '*' if prev_star => continue,
            '*' => {
                out.push('*');
                prev_star = true;
                continue;
            }
            '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            c => out.push(c),
        }
        prev_star = false;
    }
    out
}

/// Ordered set of compiled patterns; configuration order is kept for messages.
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Vec<FilePattern>,
}

impl PatternSet {
    pub fn compile<S: AsRef<str>>(raw: &[S]) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::EmptyPatternList);
        }
        let patterns = raw
            .iter()
            .map(|p| FilePattern::compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilePattern> {
        self.patterns.iter()
    }

    pub fn positives(&self) -> impl Iterator<Item = &FilePattern> {
        self.patterns
            .iter()
            .filter(|p| p.polarity == Polarity::Include)
    }

    pub fn negatives(&self) -> impl Iterator<Item = &FilePattern> {
        self.patterns
            .iter()
            .filter(|p| p.polarity == Polarity::Exclude)
    }

    /// Raw text of the inclusion patterns, in configuration order.
    pub fn positive_texts(&self) -> Vec<String> {
        self.positives().map(|p| p.raw.clone()).collect()
    }

    /// A file is allowed when an inclusion claims it and no exclusion does.
    pub fn is_file_allowed(&self, path: &SourcePath) -> bool {
        if !self.positives().any(|p| p.matches(path)) {
            return false;
        }
        !self.negatives().any(|p| p.matches(path))
    }
}

/// Convenience over [`PatternSet::is_file_allowed`] for host-native path strings.
pub fn is_file_allowed(path: &str, patterns: &PatternSet) -> bool {
    patterns.is_file_allowed(&SourcePath::new(path))
}
