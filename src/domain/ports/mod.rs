//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_host;
pub mod file_system;

pub use build_host::{BuildHost, HostError, HostResult};
pub use file_system::{FileSystem, FsError, FsResult};
