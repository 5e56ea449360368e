//! ManifestArtifact entity - the serialized manifest as an output file
//!
//! This is what the host pipeline receives and writes next to the other
//! build outputs.

/// A named output artifact with its textual content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestArtifact {
    name: String,
    content: String,
}

impl ManifestArtifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Name the host publishes the artifact under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialized content
    pub fn source(&self) -> &str {
        &self.content
    }

    /// Length of the content in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
