//! In-memory host
//!
//! Holds a prepared snapshot and collects emitted artifacts instead of
//! writing them. Used by `show` and by tests of the emit use case.

use tracing::debug;

use crate::domain::entities::{BuildSnapshot, ManifestArtifact};
use crate::domain::ports::{BuildHost, HostError, HostResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    snapshot: BuildSnapshot,
    emitted: Vec<ManifestArtifact>,
    done: bool,
}

impl InMemoryHost {
    pub fn new(snapshot: BuildSnapshot) -> Self {
        Self {
            snapshot,
            emitted: Vec::new(),
            done: false,
        }
    }

    pub fn emitted(&self) -> &[ManifestArtifact] {
        &self.emitted
    }

    /// Artifact emitted under `name`, if any
    pub fn artifact(&self, name: &str) -> Option<&ManifestArtifact> {
        self.emitted.iter().find(|a| a.name() == name)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl BuildHost for InMemoryHost {
    fn snapshot(&self) -> HostResult<BuildSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn emit_asset(&mut self, artifact: &ManifestArtifact) -> HostResult<()> {
        if self.done {
            return Err(HostError::AlreadyDone);
        }
        debug!(name = artifact.name(), bytes = artifact.size(), "artifact attached");
        self.emitted.push(artifact.clone());
        Ok(())
    }

    fn signal_done(&mut self) {
        self.done = true;
    }
}
