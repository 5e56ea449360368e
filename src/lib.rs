//! assetmap - asset manifest generator
//!
//! Maps logical asset keys (`main.js`, `vendor.css`, `logo.png`) to the
//! content-hashed filenames a bundler emitted, and publishes that mapping as a
//! single JSON artifact for server templates and deploy scripts.
//!
//! The core is [`ManifestBuilder`], a pure function from a [`BuildSnapshot`]
//! to a [`Manifest`] plus its serialized [`ManifestArtifact`]. Hosts plug in
//! through the [`BuildHost`] port.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{EmitManifestUseCase, EmitOptions, EmitReport};
pub use config::{Config, ManifestConfig};
pub use domain::entities::{AssetRecord, BuildSnapshot, Manifest, ManifestArtifact, OutputGroup};
pub use domain::ports::BuildHost;
pub use domain::services::{apply_base_path, BuiltManifest, ManifestBuilder};
pub use domain::value_objects::{ExtensionMatcher, ExtensionPattern, ExtensionTag, StripPattern};
pub use error::{AssetmapError, AssetmapResult};
pub use infrastructure::{parse_stats, InMemoryHost, StatsFileHost};
