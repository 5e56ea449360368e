//! Presentation Layer
//!
//! Command-line surface of the `assetmap` binary.

pub mod cli;

pub use cli::{Cli, Commands, ManifestOverrides};
