//! CLI argument parsing for roster
//!
//! Global flags: --file, --config, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use roster_core::format::OutputFormat;

/// Roster - console student grade manager
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Roster data file (defaults to `data_file` from roster.toml, then students.txt)
    #[arg(long, short, global = true, env = "ROSTER_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to ./roster.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. `info`, `roster_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default when no command is given)
    Shell,

    /// List all students with their averages
    List,

    /// Show students sorted by average, highest first
    Sorted,

    /// Show each student's average in roster order
    Averages,

    /// Show the highest and lowest grade for a subject
    Subject {
        /// Subject name (case-insensitive)
        name: String,
    },

    /// Show one student's details
    Show {
        /// Student ID (case-insensitive)
        id: String,
    },

    /// Add a student to the roster file
    Add {
        /// Student ID
        id: String,

        /// Student name
        name: String,

        /// Honors student (not preserved by the roster file)
        #[arg(long)]
        honors: bool,
    },

    /// Remove a student from the roster file
    Remove {
        /// Student ID (case-insensitive)
        id: String,
    },

    /// Change a student's name
    Rename {
        /// Student ID (case-insensitive)
        id: String,

        /// New name
        name: String,
    },

    /// Add or update a subject grade
    Grade {
        /// Student ID (case-insensitive)
        id: String,

        /// Subject name
        subject: String,

        /// Grade between 0 and 100
        #[arg(allow_negative_numbers = true)]
        grade: f64,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: roster_core::RosterError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_grade_command() {
        let cli = Cli::try_parse_from(["roster", "grade", "S1", "Math", "87.5"]).unwrap();
        match cli.command {
            Some(Commands::Grade { id, subject, grade }) => {
                assert_eq!(id, "S1");
                assert_eq!(subject, "Math");
                assert_eq!(grade, 87.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["roster", "list", "--format", "json", "--file", "x.txt"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.file, Some(PathBuf::from("x.txt")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["roster", "--format", "xml", "list"]).is_err());
    }
}
