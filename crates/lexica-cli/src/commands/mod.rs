//! Subcommand implementations.

pub mod add;
pub mod clean;
pub mod query;
