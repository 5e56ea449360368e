//! Error types for assetmap
//!
//! Uses `thiserror` for library errors. The manifest builder itself never
//! fails once constructed; everything here belongs to configuration, input
//! loading and artifact emission.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::HostError;
use crate::domain::value_objects::PatternError;

/// Result type alias for assetmap operations
pub type AssetmapResult<T> = Result<T, AssetmapError>;

/// Main error type for assetmap operations
#[derive(Error, Debug)]
pub enum AssetmapError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stats file does not exist
    #[error("stats file not found: {path}")]
    StatsNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A configured pattern failed to compile
    #[error("invalid {option} pattern: {source}")]
    InvalidPattern {
        option: &'static str,
        #[source]
        source: PatternError,
    },

    /// The host pipeline rejected an operation
    #[error(transparent)]
    Host(#[from] HostError),
}
