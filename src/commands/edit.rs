//! Roster file mutations: `add`, `remove`, `rename`, `grade`
//!
//! Each command loads the roster file, applies one change and writes the
//! whole file back.

use roster_core::error::{Result, RosterError};
use roster_core::format::{self, OutputFormat};
use roster_core::Roster;
use tracing::debug;

use super::dispatch::CommandContext;
use super::report::print_json;

fn finish(ctx: &CommandContext, roster: &Roster, id: &str, message: &str) -> Result<()> {
    let saved = ctx.save_roster(roster)?;
    debug!(elapsed = ?ctx.start.elapsed(), saved, "save_roster");

    match ctx.cli.format {
        OutputFormat::Json => {
            let student = roster.find_student(id).map(format::student_json);
            print_json(&serde_json::json!({
                "message": message,
                "student": student,
                "saved": saved,
            }))
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", message);
            }
            Ok(())
        }
    }
}

/// Execute the add command
pub fn add(ctx: &CommandContext, id: &str, name: &str, honors: bool) -> Result<()> {
    let mut roster = ctx.open_roster()?;
    roster.add_student(id, name, honors)?;

    if honors && !ctx.cli.quiet {
        eprintln!("warning: honors status is not stored in the roster file and will be lost when it is reloaded");
    }

    let message = if honors {
        "Honors student added."
    } else {
        "Student added."
    };
    finish(ctx, &roster, id, message)
}

/// Execute the remove command
pub fn remove(ctx: &CommandContext, id: &str) -> Result<()> {
    let mut roster = ctx.open_roster()?;
    roster
        .remove_student(id)
        .ok_or_else(|| RosterError::student_not_found(id))?;
    finish(ctx, &roster, id, "Student removed.")
}

/// Execute the rename command
pub fn rename(ctx: &CommandContext, id: &str, name: &str) -> Result<()> {
    let mut roster = ctx.open_roster()?;
    roster.rename_student(id, name)?;
    finish(ctx, &roster, id, "Name updated.")
}

/// Execute the grade command
pub fn grade(ctx: &CommandContext, id: &str, subject: &str, grade: f64) -> Result<()> {
    let mut roster = ctx.open_roster()?;
    roster.record_grade(id, subject, grade)?;
    finish(ctx, &roster, id, "Grade saved.")
}
