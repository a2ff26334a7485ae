//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use roster_core::config::RosterConfig;
use roster_core::error::Result;
use roster_core::Roster;
use tracing::debug;

use crate::cli::Cli;

/// Load configuration from `--config`, or `roster.toml` in the working directory
pub fn load_config(cli: &Cli) -> Result<RosterConfig> {
    match &cli.config {
        Some(path) => RosterConfig::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            RosterConfig::discover(&cwd)
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RosterConfig,
    pub data_file: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = load_config(cli)?;
        let data_file = config.data_file(cli.file.as_deref());
        Ok(Self {
            cli,
            config,
            data_file,
            start,
        })
    }

    /// Load the roster file, or start empty if it does not exist yet
    pub fn open_roster(&self) -> Result<Roster> {
        let mut roster = self.config.new_roster();
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "roster file missing, starting empty");
            return Ok(roster);
        }

        let report = roster.load_from_file(&self.data_file)?;
        if !self.cli.quiet {
            for token in &report.skipped_grades {
                eprintln!("Skipping invalid grade: {}", token);
            }
        }
        debug!(elapsed = ?self.start.elapsed(), loaded = report.loaded, "open_roster");
        Ok(roster)
    }

    /// Write the roster back to the data file
    pub fn save_roster(&self, roster: &Roster) -> Result<usize> {
        roster.save_to_file(&self.data_file)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
