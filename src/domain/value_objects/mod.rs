//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extension_tag;
mod pattern;

pub use extension_tag::{first_segment, join_key, ExtensionTag};
pub use pattern::{ExtensionMatcher, ExtensionPattern, PatternError, StripPattern};
