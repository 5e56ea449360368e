//! Stats-file host
//!
//! Plays the host pipeline for command-line use: the snapshot comes from a
//! stats JSON file written by the bundler, and emitted artifacts are written
//! into an output directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::{BuildSnapshot, ManifestArtifact};
use crate::domain::ports::{BuildHost, FileSystem, FsError, HostError, HostResult};

use super::stats_json::parse_stats;

pub struct StatsFileHost<FS: FileSystem> {
    fs: FS,
    stats_path: PathBuf,
    out_dir: PathBuf,
    written: Vec<PathBuf>,
    done: bool,
}

impl<FS: FileSystem> StatsFileHost<FS> {
    pub fn new(fs: FS, stats_path: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            stats_path: stats_path.into(),
            out_dir: out_dir.into(),
            written: Vec::new(),
            done: false,
        }
    }

    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Where an artifact with this name lands
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    /// Content currently stored under an artifact name, if any
    pub fn existing_artifact(&self, name: &str) -> Option<String> {
        let path = self.artifact_path(name);
        if !self.fs.exists(&path) {
            return None;
        }
        self.fs.read(&path).ok()
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<FS: FileSystem> BuildHost for StatsFileHost<FS> {
    fn snapshot(&self) -> HostResult<BuildSnapshot> {
        let content = self.fs.read(&self.stats_path).map_err(|e| match e {
            FsError::Io(source) => HostError::Io {
                path: self.stats_path.clone(),
                source,
            },
            other => HostError::Snapshot(other.to_string()),
        })?;

        let snapshot = parse_stats(&content).map_err(|e| {
            HostError::Snapshot(format!("{}: {}", self.stats_path.display(), e))
        })?;
        debug!(
            stats = %self.stats_path.display(),
            groups = snapshot.output_groups().len(),
            assets = snapshot.assets().len(),
            "loaded stats"
        );
        Ok(snapshot)
    }

    fn emit_asset(&mut self, artifact: &ManifestArtifact) -> HostResult<()> {
        if self.done {
            return Err(HostError::AlreadyDone);
        }

        let path = self.artifact_path(artifact.name());
        self.fs
            .write(&path, artifact.source())
            .map_err(|e| HostError::Emit {
                name: artifact.name().to_string(),
                message: e.to_string(),
            })?;
        info!(path = %path.display(), bytes = artifact.size(), "wrote manifest");
        self.written.push(path);
        Ok(())
    }

    fn signal_done(&mut self) {
        debug!(written = self.written.len(), "manifest phase done");
        self.done = true;
    }
}
