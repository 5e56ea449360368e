//! BuildSnapshot entity - the finalized output of one compilation
//!
//! Holds the named output groups (in the order the host reported them) and the
//! flat list of every emitted asset. The builder reads it and never mutates it.

use serde::{Deserialize, Serialize};

/// Files produced by one named output group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputGroup {
    /// The group emitted exactly one file
    Single(String),
    /// The group emitted several files, in host order
    Many(Vec<String>),
}

impl OutputGroup {
    /// Filenames in host order
    pub fn files(&self) -> &[String] {
        match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl From<&str> for OutputGroup {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<Vec<&str>> for OutputGroup {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// One emitted asset. Hosts may report more fields; only the name is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,
}

impl AssetRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Snapshot of one compilation's output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSnapshot {
    output_groups: Vec<(String, OutputGroup)>,
    assets: Vec<AssetRecord>,
}

impl BuildSnapshot {
    pub fn new(output_groups: Vec<(String, OutputGroup)>, assets: Vec<AssetRecord>) -> Self {
        Self {
            output_groups,
            assets,
        }
    }

    /// Append an output group (builder style, mostly for tests)
    pub fn with_group(mut self, name: impl Into<String>, group: impl Into<OutputGroup>) -> Self {
        self.output_groups.push((name.into(), group.into()));
        self
    }

    /// Append an emitted asset (builder style, mostly for tests)
    pub fn with_asset(mut self, name: impl Into<String>) -> Self {
        self.assets.push(AssetRecord::new(name));
        self
    }

    pub fn output_groups(&self) -> &[(String, OutputGroup)] {
        &self.output_groups
    }

    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    pub fn is_empty(&self) -> bool {
        self.output_groups.is_empty() && self.assets.is_empty()
    }
}
