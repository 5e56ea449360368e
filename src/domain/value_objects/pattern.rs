//! Extension and strip patterns
//!
//! Patterns are compiled once when the builder is constructed. Matching is an
//! unanchored search; authors anchor explicitly with `^`/`$` where needed.

use std::borrow::Cow;
use std::fmt;

use regex::Regex;

/// Predicate over an extension candidate.
///
/// The manifest builder only ever asks "does this match?", so any rule can be
/// plugged in without touching the merge logic.
pub trait ExtensionMatcher: fmt::Debug + Send + Sync {
    fn matches(&self, candidate: &str) -> bool;
}

/// Regex-backed extension matcher.
///
/// An empty source string matches nothing.
#[derive(Debug, Clone)]
pub struct ExtensionPattern {
    source: String,
    regex: Option<Regex>,
}

impl ExtensionPattern {
    /// Compile a pattern. Empty input yields a pattern that never matches.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Ok(Self {
            source: source.to_string(),
            regex: compile(source)?,
        })
    }

    /// A pattern that never matches.
    pub fn never() -> Self {
        Self {
            source: String::new(),
            regex: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl ExtensionMatcher for ExtensionPattern {
    fn matches(&self, candidate: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(candidate))
    }
}

impl fmt::Display for ExtensionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Pattern removed from output-group names before they become key fragments.
///
/// Only the first match is removed.
#[derive(Debug, Clone, Default)]
pub struct StripPattern {
    regex: Option<Regex>,
}

impl StripPattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: compile(source)?,
        })
    }

    /// No stripping at all.
    pub fn none() -> Self {
        Self { regex: None }
    }

    pub fn strip<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match &self.regex {
            Some(regex) => regex.replace(name, ""),
            None => Cow::Borrowed(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

fn compile(source: &str) -> Result<Option<Regex>, PatternError> {
    if source.is_empty() {
        return Ok(None);
    }
    Regex::new(source)
        .map(Some)
        .map_err(|e| PatternError::Invalid {
            pattern: source.to_string(),
            message: e.to_string(),
        })
}

/// Errors raised while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Invalid { pattern: String, message: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { pattern, message } => {
                write!(f, "'{}' is not a valid regular expression: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for PatternError {}
