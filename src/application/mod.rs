//! Application Layer
//!
//! Use cases that orchestrate domain services against ports.

pub mod emit;

pub use emit::{EmitManifestUseCase, EmitOptions, EmitReport};
