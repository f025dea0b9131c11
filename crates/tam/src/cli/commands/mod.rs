//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod contexts;
pub mod frequencies;
pub mod init;
pub mod merge;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Contexts(cmd) => contexts::run(ctx, &cmd),
        Commands::Frequencies(cmd) => frequencies::run(ctx, &cmd),
        Commands::Merge(cmd) => merge::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
