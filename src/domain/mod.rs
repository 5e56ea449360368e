//! Domain Layer
//!
//! The core of assetmap: pure manifest derivation without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - BuildSnapshot, Manifest, ManifestArtifact
//! - `value_objects/` - ExtensionTag and the extension/strip patterns
//! - `services/` - ManifestBuilder, ManifestDiffer
//! - `ports/` - BuildHost and FileSystem interfaces for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Each builder pass returns a fresh mapping
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
