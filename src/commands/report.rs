//! Read-only roster reports: `list`, `sorted`, `averages`, `subject`, `show`

use roster_core::error::{Result, RosterError};
use roster_core::format::{self, OutputFormat};
use serde::Serialize;

use super::dispatch::CommandContext;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Execute the list command
pub fn list(ctx: &CommandContext) -> Result<()> {
    let roster = ctx.open_roster()?;
    match ctx.cli.format {
        OutputFormat::Json => print_json(&format::listing_json(&roster)),
        OutputFormat::Human => {
            print!("{}", format::render_listing(&roster));
            Ok(())
        }
    }
}

/// Execute the sorted command
pub fn sorted(ctx: &CommandContext) -> Result<()> {
    let roster = ctx.open_roster()?;
    match ctx.cli.format {
        OutputFormat::Json => print_json(&roster.sorted_by_average()),
        OutputFormat::Human => {
            print!("{}", format::render_sorted(&roster));
            Ok(())
        }
    }
}

/// Execute the averages command
pub fn averages(ctx: &CommandContext) -> Result<()> {
    let roster = ctx.open_roster()?;
    match ctx.cli.format {
        OutputFormat::Json => print_json(&roster.averages()),
        OutputFormat::Human => {
            print!("{}", format::render_averages(&roster));
            Ok(())
        }
    }
}

/// Execute the subject command
pub fn subject(ctx: &CommandContext, name: &str) -> Result<()> {
    let roster = ctx.open_roster()?;
    match ctx.cli.format {
        OutputFormat::Json => print_json(&format::subject_report_json(&roster, name)?),
        OutputFormat::Human => {
            print!("{}", format::render_subject_report(&roster, name));
            Ok(())
        }
    }
}

/// Execute the show command
pub fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let roster = ctx.open_roster()?;
    let student = roster
        .find_student(id)
        .ok_or_else(|| RosterError::student_not_found(id))?;
    match ctx.cli.format {
        OutputFormat::Json => print_json(&format::student_json(student)),
        OutputFormat::Human => {
            print!("{}", student.render_details());
            Ok(())
        }
    }
}
