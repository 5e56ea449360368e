//! Manifest entity - logical asset key → hashed output filename
//!
//! Keys are unique and the last write wins. Overwriting a key keeps its
//! original position, so the serialized order is the order in which keys were
//! first constructed.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, String)>,
    /// key → position in `entries`
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the filename it replaced (if any)
    pub fn insert(&mut self, key: impl Into<String>, filename: impl Into<String>) -> Option<String> {
        let key = key.into();
        let filename = filename.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, filename)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, filename));
                None
            }
        }
    }

    /// Merge `other` on top of `self`; entries from `other` win on collision
    pub fn merged_with(mut self, other: Manifest) -> Self {
        for (key, filename) in other.entries {
            self.insert(key, filename);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in construction order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, filename)| (key.as_str(), filename.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON with 2-space indentation and no trailing newline
    pub fn to_json_pretty(&self) -> String {
        // A map of strings always serializes.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ManifestVisitor)
    }
}

struct ManifestVisitor;

impl<'de> Visitor<'de> for ManifestVisitor {
    type Value = Manifest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of asset keys to filenames")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Manifest, A::Error> {
        let mut manifest = Manifest::new();
        while let Some((key, filename)) = access.next_entry::<String, String>()? {
            manifest.insert(key, filename);
        }
        Ok(manifest)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut manifest = Manifest::new();
        for (key, filename) in iter {
            manifest.insert(key, filename);
        }
        manifest
    }
}
