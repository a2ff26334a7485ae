//! Command implementations for one-shot roster commands

use roster_core::error::Result;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{edit, report, shell};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Shell => shell::execute(ctx),
            Commands::List => report::list(ctx),
            Commands::Sorted => report::sorted(ctx),
            Commands::Averages => report::averages(ctx),
            Commands::Subject { name } => report::subject(ctx, name),
            Commands::Show { id } => report::show(ctx, id),
            Commands::Add { id, name, honors } => edit::add(ctx, id, name, *honors),
            Commands::Remove { id } => edit::remove(ctx, id),
            Commands::Rename { id, name } => edit::rename(ctx, id, name),
            Commands::Grade { id, subject, grade } => edit::grade(ctx, id, subject, *grade),
        }
    }
}
