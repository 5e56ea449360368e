use std::path::Path;

use anyhow::{Context, Result};
use assetmap::application::{EmitManifestUseCase, EmitOptions};
use assetmap::config::Config;
use assetmap::domain::ports::BuildHost;
use assetmap::error::AssetmapError;
use assetmap::infrastructure::{InMemoryHost, LocalFs, StatsFileHost};
use assetmap::presentation::ManifestOverrides;
use assetmap::ui::json::emit_event;
use assetmap::ui::json::events::{CompleteEvent, ManifestEvent, StartEvent};

use super::resolve_builder;

const COMMAND: &str = "show";

pub fn cmd_show(
    config: &Config,
    stats: &Path,
    overrides: &ManifestOverrides,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    if !stats.is_file() {
        return Err(AssetmapError::StatsNotFound {
            path: stats.to_path_buf(),
        }
        .into());
    }

    let builder = resolve_builder(config, overrides)?;
    let snapshot = StatsFileHost::new(LocalFs::new(), stats, ".")
        .snapshot()
        .map_err(AssetmapError::from)
        .with_context(|| format!("failed to read {}", stats.display()))?;

    let mut host = InMemoryHost::new(snapshot);
    let report = EmitManifestUseCase::new(&builder).execute(&mut host, EmitOptions::default())?;

    if json {
        emit_event(&ManifestEvent::new(
            COMMAND,
            report.artifact.name(),
            report.artifact.size(),
            &report.manifest,
        ))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
    } else {
        println!("{}", report.artifact.source());
    }
    Ok(())
}
