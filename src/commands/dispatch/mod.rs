//! Command dispatch logic for roster

use std::time::Instant;

use roster_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::shell;

mod command;
mod commands;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), data_file = %ctx.data_file.display(), "load_config");

    match &cli.command {
        None | Some(Commands::Shell) => shell::execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
