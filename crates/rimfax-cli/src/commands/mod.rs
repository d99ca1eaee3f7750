//! CLI command implementations.

pub mod solve;
pub mod version;
