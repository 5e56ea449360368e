//! Emit Manifest Use Case
//!
//! Orchestrates one manifest phase against a host pipeline:
//! 1. Take the finalized snapshot from the host
//! 2. Build the manifest (pure)
//! 3. Attach the artifact to the host output (skipped on dry run)
//! 4. Signal the host that the phase is done
//!
//! The done signal is sent whether or not emission succeeded, so a host that
//! waits on it is never left hanging.

use tracing::{debug, info, warn};

use crate::domain::entities::{Manifest, ManifestArtifact};
use crate::domain::ports::BuildHost;
use crate::domain::services::ManifestBuilder;
use crate::error::AssetmapResult;

/// Options for one emit run
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitOptions {
    /// Build but do not hand the artifact to the host
    pub dry_run: bool,
}

/// Outcome of one emit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub manifest: Manifest,
    pub artifact: ManifestArtifact,
    pub emitted: bool,
}

impl EmitReport {
    pub fn entry_count(&self) -> usize {
        self.manifest.len()
    }
}

pub struct EmitManifestUseCase<'a> {
    builder: &'a ManifestBuilder,
}

impl<'a> EmitManifestUseCase<'a> {
    pub fn new(builder: &'a ManifestBuilder) -> Self {
        Self { builder }
    }

    pub fn execute<H: BuildHost>(&self, host: &mut H, options: EmitOptions) -> AssetmapResult<EmitReport> {
        let result = self.run(host, options);
        host.signal_done();
        if let Err(e) = &result {
            warn!(error = %e, "manifest phase failed");
        }
        result
    }

    fn run<H: BuildHost>(&self, host: &mut H, options: EmitOptions) -> AssetmapResult<EmitReport> {
        let snapshot = host.snapshot()?;
        debug!(
            groups = snapshot.output_groups().len(),
            assets = snapshot.assets().len(),
            "building manifest"
        );

        let built = self.builder.build(&snapshot);

        let emitted = if options.dry_run {
            info!(name = built.artifact.name(), "dry run, artifact not emitted");
            false
        } else {
            host.emit_asset(&built.artifact)?;
            true
        };

        info!(
            name = built.artifact.name(),
            entries = built.manifest.len(),
            bytes = built.artifact.size(),
            "manifest built"
        );

        Ok(EmitReport {
            manifest: built.manifest,
            artifact: built.artifact,
            emitted,
        })
    }
}
