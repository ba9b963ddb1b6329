//! CLI command implementations.

pub mod mirror;
pub mod project;
pub mod run;
