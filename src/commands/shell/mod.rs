//! `roster shell` - the interactive menu
//!
//! Starts with an empty roster. Input is validated here before it reaches
//! the roster; save and load go through the roster file format.

mod input;


use std::io::{self, BufRead, Write};
use std::path::Path;

use roster_core::bail_usage;
use roster_core::error::Result;
use roster_core::format::{self, OutputFormat};
use roster_core::Roster;
use tracing::debug;

use super::dispatch::CommandContext;

const MENU: &str = "\
======================================
       Student Management System
======================================
1. Add student
2. Remove student
3. Update student name
4. Add or update grade
5. View student details
6. List all students
7. Show students sorted by average
8. Report: average grade for each student
9. Report: high/low grade for a subject
10. Save to file
11. Load from file
0. Exit
======================================
";

/// Execute the shell command on stdin/stdout
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.cli.format == OutputFormat::Json {
        bail_usage!("the interactive shell only supports human output");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ctx.config.new_roster(), stdin.lock(), stdout.lock());
    shell.run()?;
    debug!(elapsed = ?ctx.start.elapsed(), "shell_exit");
    Ok(())
}

/// Menu loop state: the roster plus the console it talks to
pub struct Shell<R, W> {
    roster: Roster,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(roster: Roster, input: R, out: W) -> Self {
        Self {
            roster,
            input,
            out,
        }
    }

    #[cfg(test)]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run until the user picks 0 or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.out)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and handle one choice; `false` means exit
    fn step(&mut self) -> io::Result<bool> {
        write!(self.out, "{}", MENU)?;
        let choice = self.read_int("Enter your choice: ")?;
        debug!(choice, "menu_choice");

        match choice {
            1 => self.add_student()?,
            2 => self.remove_student()?,
            3 => self.update_name()?,
            4 => self.add_or_update_grade()?,
            5 => self.view_details()?,
            6 => write!(self.out, "{}", format::render_listing(&self.roster))?,
            7 => write!(self.out, "{}", format::render_sorted(&self.roster))?,
            8 => write!(self.out, "{}", format::render_averages(&self.roster))?,
            9 => self.subject_report()?,
            10 => self.save()?,
            11 => self.load()?,
            0 => writeln!(self.out, "Exiting. Goodbye!")?,
            _ => writeln!(self.out, "Invalid choice. Try again.")?,
        }

        writeln!(self.out)?;
        Ok(choice != 0)
    }

    fn add_student(&mut self) -> io::Result<()> {
        let id = self.read_non_empty("Enter student ID: ")?;
        let name = self.read_non_empty("Enter student name: ")?;
        let is_honors = self
            .read_line("Is this an honors student? (Y/N): ")?
            .trim()
            .eq_ignore_ascii_case("y");

        match self.roster.add_student(&id, &name, is_honors) {
            Ok(()) if is_honors => writeln!(self.out, "Honors student added."),
            Ok(()) => writeln!(self.out, "Student added."),
            Err(_) => writeln!(self.out, "Student with ID {} already exists.", id),
        }
    }

    fn remove_student(&mut self) -> io::Result<()> {
        let id = self.read_non_empty("Enter ID to remove: ")?;
        match self.roster.remove_student(&id) {
            Some(_) => writeln!(self.out, "Student removed."),
            None => writeln!(self.out, "Student not found."),
        }
    }

    fn update_name(&mut self) -> io::Result<()> {
        let id = self.read_non_empty("Enter ID: ")?;
        if !self.roster.contains(&id) {
            return writeln!(self.out, "Student not found.");
        }
        let name = self.read_non_empty("Enter new name: ")?;
        match self.roster.rename_student(&id, &name) {
            Ok(()) => writeln!(self.out, "Name updated."),
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    fn add_or_update_grade(&mut self) -> io::Result<()> {
        let id = self.read_non_empty("Enter ID: ")?;
        if !self.roster.contains(&id) {
            return writeln!(self.out, "Student not found.");
        }
        let subject = self.read_non_empty("Subject name: ")?;
        let grade = self.read_grade()?;
        match self.roster.record_grade(&id, &subject, grade) {
            Ok(()) => writeln!(self.out, "Grade saved."),
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    fn view_details(&mut self) -> io::Result<()> {
        let id = self.read_non_empty("Enter ID: ")?;
        match self.roster.find_student(&id) {
            Some(student) => write!(self.out, "{}", student.render_details()),
            None => writeln!(self.out, "Student not found."),
        }
    }

    fn subject_report(&mut self) -> io::Result<()> {
        let subject = self.read_non_empty("Enter subject: ")?;
        write!(
            self.out,
            "{}",
            format::render_subject_report(&self.roster, &subject)
        )
    }

    fn save(&mut self) -> io::Result<()> {
        let file = self.read_non_empty("File name: ")?;
        match self.roster.save_to_file(Path::new(&file)) {
            Ok(count) => writeln!(self.out, "Saved {} students to {}", count, file),
            Err(e) => writeln!(self.out, "Error saving to file: {}", e),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let file = self.read_non_empty("File name: ")?;
        match self.roster.load_from_file(Path::new(&file)) {
            Ok(report) => write!(self.out, "{}", format::render_load_report(&report, &file)),
            Err(e) => writeln!(self.out, "Error loading from file: {}", e),
        }
    }
}
