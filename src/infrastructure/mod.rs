//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `host/` - BuildHost implementations (stats file, in-memory)

pub mod fs;
pub mod host;

// Re-export for convenience
pub use fs::LocalFs;
pub use host::{parse_stats, InMemoryHost, StatsFileHost};
