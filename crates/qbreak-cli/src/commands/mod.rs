//! CLI command implementations.

pub mod common;
pub mod edit;
pub mod run;
pub mod version;
