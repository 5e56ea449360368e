use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use assetmap::application::{EmitManifestUseCase, EmitOptions};
use assetmap::config::Config;
use assetmap::domain::services::ManifestDiffer;
use assetmap::error::AssetmapError;
use assetmap::infrastructure::{LocalFs, StatsFileHost};
use assetmap::presentation::ManifestOverrides;
use assetmap::ui::diff::render_unified_diff_with_line_numbers;
use assetmap::ui::json::emit_event;
use assetmap::ui::json::events::{CompleteEvent, DiffEvent, ManifestEvent, StartEvent};

use super::resolve_builder;

const COMMAND: &str = "emit";

pub fn cmd_emit(
    config: &Config,
    stats: &Path,
    out_dir: Option<&Path>,
    dry_run: bool,
    overrides: &ManifestOverrides,
    json: bool,
) -> Result<()> {
    let started = Instant::now();
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
    let out_dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_out_dir(stats));
    let mut host = StatsFileHost::new(LocalFs::new(), stats, &out_dir);
    let previous = dry_run
        .then(|| host.existing_artifact(builder.file_name()))
        .flatten();

    let report = EmitManifestUseCase::new(&builder)
        .execute(&mut host, EmitOptions { dry_run })
        .with_context(|| format!("failed to emit manifest for {}", stats.display()))?;

    let target = host.artifact_path(report.artifact.name());

    if json {
        let mut event = ManifestEvent::new(
            COMMAND,
            report.artifact.name(),
            report.artifact.size(),
            &report.manifest,
        );
        if report.emitted {
            event = event.emitted_to(target.display().to_string());
        }
        emit_event(&event)?;
    }

    if dry_run {
        let diff = ManifestDiffer::new().diff(previous.as_deref(), &report.manifest);
        if json {
            emit_event(&DiffEvent::new(
                COMMAND,
                diff.has_changes(),
                &diff.added,
                &diff.changed,
                &diff.removed,
            ))?;
        } else if diff.has_changes() {
            print!(
                "{}",
                render_unified_diff_with_line_numbers(&target.display().to_string(), &diff)
            );
            println!("Would update {} ({})", target.display(), diff.summary());
        } else {
            println!("{} is up to date", target.display());
        }
    } else if !json {
        println!(
            "Wrote {} ({} entries, {} bytes)",
            target.display(),
            report.entry_count(),
            report.artifact.size()
        );
    }

    if json {
        let elapsed = started.elapsed().as_millis() as u64;
        emit_event(&CompleteEvent::success(COMMAND).with_duration(elapsed))?;
    }
    Ok(())
}

fn default_out_dir(stats: &Path) -> PathBuf {
    match stats.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
