//! Domain Entities
//!
//! Core domain objects: the build snapshot coming in, the manifest and its
//! artifact going out.

mod artifact;
mod manifest;
mod snapshot;

pub use artifact::ManifestArtifact;
pub use manifest::Manifest;
pub use snapshot::{AssetRecord, BuildSnapshot, OutputGroup};
