//! BuildHost port - the pipeline the manifest is produced for
//!
//! The host owns everything around the pure builder: it supplies the
//! finalized snapshot, accepts the artifact as an extra output, and is told
//! explicitly when manifest production has finished.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::{BuildSnapshot, ManifestArtifact};

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Host pipeline errors
#[derive(Debug)]
pub enum HostError {
    /// Snapshot could not be produced
    Snapshot(String),
    /// Artifact could not be written
    Emit { name: String, message: String },
    /// Emission was requested after the host was signalled done
    AlreadyDone,
    /// I/O error at a known path
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Snapshot(msg) => write!(f, "could not read build snapshot: {}", msg),
            HostError::Emit { name, message } => {
                write!(f, "could not emit '{}': {}", name, message)
            }
            HostError::AlreadyDone => write!(f, "host already received the done signal"),
            HostError::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Host build pipeline interface
///
/// Implementations:
/// - `StatsFileHost` - stats JSON on disk, artifacts written to an output dir
/// - `InMemoryHost` - keeps everything in memory (tests, `show`)
pub trait BuildHost {
    /// Finalized snapshot of the current compilation
    fn snapshot(&self) -> HostResult<BuildSnapshot>;

    /// Attach an artifact to the compilation output
    fn emit_asset(&mut self, artifact: &ManifestArtifact) -> HostResult<()>;

    /// Manifest production for this compilation is complete
    fn signal_done(&mut self);
}
