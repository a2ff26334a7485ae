//! Output format handling for roster reports
//!
//! Supports two output formats:
//! - human: the console text shown by the menu and one-shot commands
//! - json: stable, machine-readable JSON

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::LoadReport;
use crate::error::RosterError;
use crate::grade::number_text;
use crate::roster::{Roster, StudentAverage, SubjectExtremes};
use crate::student::Student;

/// Output format for roster commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RosterError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Every student's summary line in insertion order
pub fn render_listing(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No students to display.\n".to_string();
    }
    let mut out = String::from("=== All Students ===\n");
    for student in roster {
        let _ = writeln!(out, "{}", student.render_summary());
    }
    out
}

fn render_average_lines(header: &str, averages: &[StudentAverage]) -> String {
    if averages.is_empty() {
        return "No students to report.\n".to_string();
    }
    let mut out = format!("=== {} ===\n", header);
    for entry in averages {
        let _ = writeln!(
            out,
            "{} - {} | Average: {:.2}",
            entry.id, entry.name, entry.average
        );
    }
    out
}

/// Students ranked by average, highest first
pub fn render_sorted(roster: &Roster) -> String {
    render_average_lines(
        "Students Sorted by Average Grade (High to Low)",
        &roster.sorted_by_average(),
    )
}

/// Each student's average in insertion order
pub fn render_averages(roster: &Roster) -> String {
    render_average_lines("Average Grade for Each Student", &roster.averages())
}

/// Highest and lowest holder of a subject
pub fn render_subject_report(roster: &Roster, subject: &str) -> String {
    if roster.is_empty() {
        return "No students available.\n".to_string();
    }
    match roster.subject_extremes(subject) {
        None => format!("No grades found for subject: {}\n", subject),
        Some(SubjectExtremes {
            subject,
            highest,
            lowest,
        }) => format!(
            "=== Subject Report: {} ===\nHighest: {} - {} | Grade: {}\nLowest: {} - {} | Grade: {}\n",
            subject,
            highest.id,
            highest.name,
            number_text(highest.grade),
            lowest.id,
            lowest.name,
            number_text(lowest.grade)
        ),
    }
}

/// Human summary of a finished load
pub fn render_load_report(report: &LoadReport, source: &str) -> String {
    let mut out = String::new();
    for token in &report.skipped_grades {
        let _ = writeln!(out, "Skipping invalid grade: {}", token);
    }
    let _ = writeln!(out, "Loaded {} students from {}", report.loaded, source);
    out
}

/// JSON view of a single student
pub fn student_json(student: &Student) -> Value {
    serde_json::json!({
        "id": student.id(),
        "name": student.name(),
        "kind": student.kind(),
        "grades": student.grades(),
        "average": student.compute_average(),
    })
}

/// JSON array of every student in insertion order
pub fn listing_json(roster: &Roster) -> Value {
    Value::Array(roster.iter().map(student_json).collect())
}

/// JSON for a subject report; `null` extremes when nobody has the subject
pub fn subject_report_json(roster: &Roster, subject: &str) -> serde_json::Result<Value> {
    match roster.subject_extremes(subject) {
        Some(report) => serde_json::to_value(report),
        None => Ok(serde_json::json!({
            "subject": subject,
            "highest": null,
            "lowest": null,
        })),
    }
}
