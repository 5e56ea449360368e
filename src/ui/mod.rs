//! Terminal output for the CLI

pub mod diff;
pub mod json;
