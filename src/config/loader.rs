//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AssetmapError, AssetmapResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "assetmap.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetmapResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetmapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file that exists wins. A file that exists but does not
/// parse is an error, never a silent fall back to defaults.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> AssetmapResult<(Config, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("assetmap").join("config.toml")));

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&candidate)?;
        debug!(path = %candidate.display(), "loaded config");
        return Ok((with_env_overrides(config), warnings));
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (ASSETMAP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(base_path) = lookup("ASSETMAP_BASE_PATH") {
        config.manifest.base_path = base_path;
    }

    if let Some(file_name) = lookup("ASSETMAP_FILE_NAME") {
        if !file_name.trim().is_empty() {
            config.manifest.file_name = file_name;
        }
    }

    if let Some(strip) = lookup("ASSETMAP_STRIP_PATTERN") {
        config.manifest.strip_pattern = strip;
    }

    if let Some(transform) = lookup("ASSETMAP_TRANSFORM_EXTENSIONS") {
        config.manifest.transform_extensions = transform;
    }

    if let Some(image) = lookup("ASSETMAP_IMAGE_EXTENSIONS") {
        config.manifest.image_extensions = image;
    }

    // An unrecognized level keeps the configured one; see `env_warnings`.
    if let Some(Ok(verbosity)) = lookup("ASSETMAP_VERBOSITY").map(|v| v.parse::<Verbosity>()) {
        config.output.verbosity = verbosity;
    }

    config
}

/// Environment values that were present but could not be applied
pub fn env_warnings(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    lookup("ASSETMAP_VERBOSITY")
        .and_then(|value| value.parse::<Verbosity>().err())
        .map(|e| format!("ignoring ASSETMAP_VERBOSITY: {e}"))
        .into_iter()
        .collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "manifest",
        "base_path",
        "file_name",
        "strip_pattern",
        "transform_extensions",
        "image_extensions",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
