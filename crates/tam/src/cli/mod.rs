//! CLI support for the `tam` binary.

pub mod args;
pub mod commands;
pub mod context;

pub use context::CommandContext;
