//! Configuration module for assetmap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETMAP_*)
//! 3. Project config (assetmap.toml, or --config)
//! 4. User config (<config_dir>/assetmap/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{env_warnings, with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ManifestConfig, OutputConfig, Verbosity};
