//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod manifest_builder;

pub use differ::{DiffLine, DiffResult, DiffTag, ManifestDiffer};
pub use manifest_builder::{
    apply_base_path, BuiltManifest, ManifestBuilder, DEFAULT_FILE_NAME, DEFAULT_IMAGE_EXTENSIONS,
    DEFAULT_TRANSFORM_EXTENSIONS,
};
