//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Manifest override flags sit on top of env vars and config files

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ManifestConfig;

/// assetmap - asset manifest generator for hashed build outputs
#[derive(Parser, Debug)]
#[command(name = "assetmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./assetmap.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the manifest from a stats file and write it next to the build output
    Emit {
        /// Stats JSON written by the bundler
        #[arg(short, long)]
        stats: PathBuf,

        /// Directory the manifest is written to (default: the stats file's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        overrides: ManifestOverrides,
    },

    /// Print the manifest for a stats file without writing anything
    Show {
        /// Stats JSON written by the bundler
        #[arg(short, long)]
        stats: PathBuf,

        #[command(flatten)]
        overrides: ManifestOverrides,
    },

    /// Show how filenames are classified (debugging)
    Classify {
        /// Filenames to classify
        #[arg(required = true)]
        filenames: Vec<String>,

        #[command(flatten)]
        overrides: ManifestOverrides,
    },
}

/// Per-invocation manifest options
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestOverrides {
    /// Prefix for every manifest key and value
    #[arg(long)]
    pub base_path: Option<String>,

    /// Name of the manifest file
    #[arg(long)]
    pub file_name: Option<String>,

    /// Regex removed from output-group names
    #[arg(long = "strip")]
    pub strip_pattern: Option<String>,

    /// Regex of wrapper extensions (gz, map, ...)
    #[arg(long = "transform-ext")]
    pub transform_extensions: Option<String>,

    /// Regex of image extensions recovered from the asset list
    #[arg(long = "image-ext")]
    pub image_extensions: Option<String>,
}

impl ManifestOverrides {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, mut config: ManifestConfig) -> ManifestConfig {
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        if let Some(file_name) = &self.file_name {
            config.file_name = file_name.clone();
        }
        if let Some(strip) = &self.strip_pattern {
            config.strip_pattern = strip.clone();
        }
        if let Some(transform) = &self.transform_extensions {
            config.transform_extensions = transform.clone();
        }
        if let Some(image) = &self.image_extensions {
            config.image_extensions = image.clone();
        }
        config
    }
}
