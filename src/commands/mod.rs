//! Command implementations for the `assetmap` binary

pub mod classify;
pub mod emit;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use assetmap::config::{env_warnings, Config, ConfigWarning};
use assetmap::domain::services::ManifestBuilder;
use assetmap::presentation::ManifestOverrides;

/// Apply CLI flags on top of the loaded configuration and build the
/// manifest builder from the result.
pub fn resolve_builder(config: &Config, overrides: &ManifestOverrides) -> Result<ManifestBuilder> {
    overrides
        .apply(config.manifest.clone())
        .to_builder()
        .context("failed to compile manifest patterns")
}

/// Load configuration (env > config file > defaults) and report unknown keys
/// on stderr
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            Config::load_or_default(Some(&cwd))?
        }
    };

    for warning in &warnings {
        print_config_warning(warning);
    }
    for warning in env_warnings(|name| std::env::var(name).ok()) {
        eprintln!("warning: {warning}");
    }
    Ok(config)
}

fn print_config_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => eprintln!(
            "warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => eprintln!("warning: unknown config key '{}' in {}", warning.key, location),
    }
}
