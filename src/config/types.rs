//! Configuration type definitions

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    ManifestBuilder, DEFAULT_FILE_NAME, DEFAULT_IMAGE_EXTENSIONS, DEFAULT_TRANSFORM_EXTENSIONS,
};
use crate::domain::value_objects::{ExtensionPattern, StripPattern};
use crate::error::{AssetmapError, AssetmapResult};

use super::loader::{self, ConfigWarning};

/// Manifest options (`[manifest]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Prefix for every key and value
    #[serde(default)]
    pub base_path: String,

    /// Name of the published artifact
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Removed from output-group names before keying
    #[serde(default)]
    pub strip_pattern: String,

    /// Wrapper extensions folded into compound tags
    #[serde(default = "default_transform_extensions")]
    pub transform_extensions: String,

    /// Tags recovered by scanning all assets
    #[serde(default = "default_image_extensions")]
    pub image_extensions: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            file_name: default_file_name(),
            strip_pattern: String::new(),
            transform_extensions: default_transform_extensions(),
            image_extensions: default_image_extensions(),
        }
    }
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_transform_extensions() -> String {
    DEFAULT_TRANSFORM_EXTENSIONS.to_string()
}

fn default_image_extensions() -> String {
    DEFAULT_IMAGE_EXTENSIONS.to_string()
}

impl ManifestConfig {
    /// Compile the patterns and construct a builder
    pub fn to_builder(&self) -> AssetmapResult<ManifestBuilder> {
        let strip = StripPattern::new(&self.strip_pattern).map_err(|source| {
            AssetmapError::InvalidPattern {
                option: "strip_pattern",
                source,
            }
        })?;
        let transform = ExtensionPattern::new(&self.transform_extensions).map_err(|source| {
            AssetmapError::InvalidPattern {
                option: "transform_extensions",
                source,
            }
        })?;
        let image = ExtensionPattern::new(&self.image_extensions).map_err(|source| {
            AssetmapError::InvalidPattern {
                option: "image_extensions",
                source,
            }
        })?;

        Ok(ManifestBuilder::new()
            .with_base_path(self.base_path.as_str())
            .with_file_name(self.file_name.as_str())
            .with_strip(strip)
            .with_transform_matcher(transform)
            .with_image_matcher(image))
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!(
                "unknown verbosity '{other}' (expected quiet, normal, verbose or debug)"
            )),
        }
    }
}

impl Verbosity {
    /// Default tracing filter directive for this level
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetmapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetmapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> AssetmapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ASSETMAP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
