//! Manifest differ
//!
//! Compares a previously published manifest with a freshly built one, both as
//! text (for display) and as entries (for the summary).

use similar::{ChangeTag, TextDiff};

use crate::domain::entities::Manifest;

/// A single line of a manifest text diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub old_line: Option<usize>,
    pub new_line: Option<usize>,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    Delete,
    Insert,
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of comparing two manifests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    /// Keys present only in the new manifest
    pub added: Vec<String>,
    /// Keys present only in the old manifest
    pub removed: Vec<String>,
    /// Keys whose filename changed
    pub changed: Vec<String>,
}

impl DiffResult {
    /// Whether writing the new manifest would change the file on disk.
    ///
    /// Decided on the text, so reordered, reformatted or corrupt content
    /// counts as a change even when every entry matches.
    pub fn has_changes(&self) -> bool {
        self.changed_lines().next().is_some()
    }

    /// Whether any entry was added, removed or pointed at a new filename
    pub fn has_entry_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty())
    }

    /// Only inserted and deleted lines
    pub fn changed_lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.lines.iter().filter(|l| l.tag != DiffTag::Equal)
    }

    /// Short summary, e.g. "+2 ~1 -0"
    pub fn summary(&self) -> String {
        format!(
            "+{} ~{} -{}",
            self.added.len(),
            self.changed.len(),
            self.removed.len()
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestDiffer;

impl ManifestDiffer {
    pub fn new() -> Self {
        Self
    }

    /// Diff a published manifest (its text, if any) against a new build.
    ///
    /// Previous content that is not a manifest is treated as empty for the
    /// entry summary but still shows up in the text diff.
    pub fn diff(&self, previous: Option<&str>, next: &Manifest) -> DiffResult {
        let old_text = previous.unwrap_or("");
        let new_text = next.to_json_pretty();
        let old_manifest: Manifest = previous
            .and_then(|text| serde_json::from_str(text).ok())
            .unwrap_or_default();

        let mut result = DiffResult {
            lines: line_diff(old_text, &new_text),
            ..DiffResult::default()
        };

        for (key, filename) in next.iter() {
            match old_manifest.get(key) {
                None => result.added.push(key.to_string()),
                Some(old) if old != filename => result.changed.push(key.to_string()),
                Some(_) => {}
            }
        }
        result.removed = old_manifest
            .keys()
            .filter(|key| !next.contains_key(key))
            .map(str::to_string)
            .collect();

        result
    }
}

fn line_diff(old: &str, new: &str) -> Vec<DiffLine> {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .map(|change| DiffLine {
            tag: change.tag().into(),
            old_line: change.old_index().map(|i| i + 1),
            new_line: change.new_index().map(|i| i + 1),
            content: change.value().trim_end_matches('\n').to_string(),
        })
        .collect()
}
