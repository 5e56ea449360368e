//! Extension tag value object
//!
//! The classification key of an output file: its last `.`-segment, or a
//! compound `inner.wrapper` tag when the last segment is a transform
//! extension such as `map` or `gz`.

use std::fmt;

use super::pattern::ExtensionMatcher;

const DELIMITER: char = '.';

/// Classification tag of a filename (`js`, `js.map`, `css.gz`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionTag(String);

impl ExtensionTag {
    /// Classify a filename.
    ///
    /// - `main.a1b2.js` → `js`
    /// - `main.a1b2.js.map` → `js.map` when `map` is a transform extension
    /// - `README` → `README` (no delimiter: the whole name is the tag)
    /// - `map` → `map` (a wrapper with nothing beneath it stays bare)
    pub fn classify(filename: &str, transform: &dyn ExtensionMatcher) -> Self {
        let mut segments = filename.rsplit(DELIMITER);
        // rsplit always yields at least one segment
        let last = segments.next().unwrap_or(filename);

        if transform.matches(last) {
            if let Some(inner) = segments.next() {
                return Self(format!("{inner}{DELIMITER}{last}"));
            }
        }

        Self(last.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything before the first delimiter (`logo.c3d4.png` → `logo`).
///
/// Image keys truncate here, unlike extension tags which work from the end.
pub fn first_segment(filename: &str) -> &str {
    filename
        .split_once(DELIMITER)
        .map_or(filename, |(head, _)| head)
}

/// Join a key fragment and a tag: `main` + `js` → `main.js`
pub fn join_key(fragment: &str, tag: &ExtensionTag) -> String {
    format!("{fragment}{DELIMITER}{tag}")
}
